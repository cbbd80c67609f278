use std::io::Cursor;
use std::iter::repeat;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqid_io::fasta::{Reader, Record};
use seqid_io::seqid::{self, SeqId, Strand};

/// number of records for all benchmarks
const N: usize = 10_000;

/// generates 'nrecords' FASTA records with given properties
fn gen_fasta(nrecords: usize, seq_len: usize, line_width: usize, cr: bool) -> Vec<u8> {
    let newline: &[u8] = if cr { b"\r\n" } else { b"\n" };
    let seq: Vec<_> = repeat(b'A').take(seq_len).collect();
    let mut out = vec![];
    for i in 0..nrecords {
        out.extend(format!(">seq{}@D1@{} ", i, seq_len * 3).bytes());
        out.extend(repeat(b'd').take(50));
        out.extend(newline);
        for s in seq.chunks(line_width) {
            out.extend(s);
            out.extend(newline);
        }
    }
    out
}

fn bench_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_serial");
    for &(seq_len, width) in &[(200, 60), (500, 500), (5000, 80)] {
        let data = gen_fasta(N, seq_len, width, false);
        group.throughput(Throughput::Bytes(data.len() as u64));
        let id = format!("{}/{}", seq_len, width);
        group.bench_with_input(BenchmarkId::from_parameter(id), &data, |b, data| {
            b.iter(|| {
                let mut reader = Reader::new(Cursor::new(data));
                let mut record = Record::new();
                let mut n = 0;
                while reader.read_serial(&mut record).unwrap().is_some() {
                    n += record.len();
                }
                black_box(n)
            })
        });
    }
    group.finish();
}

fn bench_indexed(c: &mut Criterion) {
    let data = gen_fasta(N, 500, 60, true);
    let mut reader = Reader::new(Cursor::new(&data));
    let mut offsets: Vec<_> = reader
        .records()
        .map(|r| r.unwrap().offset())
        .collect();
    offsets.reverse();

    let mut group = c.benchmark_group("read_indexed");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("reversed", |b| {
        let mut record = Record::new();
        b.iter(|| {
            for offset in &offsets {
                record.set_offset(*offset);
                reader.read_indexed(&mut record).unwrap();
            }
            black_box(record.len())
        })
    });
    group.finish();
}

fn bench_seqid(c: &mut Criterion) {
    let mut record = Record::from_parts("", "", b"MKVLAAGI");
    let id = SeqId::new("contig_12", Strand::Reverse, 2, 1500).with_comment("sample");
    c.bench_function("encode_header", |b| {
        b.iter(|| seqid::encode_header(black_box(&id), &mut record).unwrap())
    });
    c.bench_function("decode_header", |b| {
        b.iter(|| seqid::decode_header(black_box(&record)).unwrap())
    });
    c.bench_function("parse_line", |b| {
        b.iter(|| seqid::parse_line(black_box("contig_12 R 2 1500 sample")).unwrap())
    });
}

criterion_group!(benches, bench_serial, bench_indexed, bench_seqid);
criterion_main!(benches);
