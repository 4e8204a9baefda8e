use criterion::{black_box, Criterion};
use hash_collision_report::prelude::*;

use crate::assets;

pub fn bench_parse_records(c: &mut Criterion) {
    for &hash_count in &[16, 64] {
        let json = assets::data_collisions_json(hash_count);
        c.bench_function(&format!("parse_data_collisions_{}", hash_count), |b| {
            b.iter(|| {
                let record: DataCollisionsStatistics =
                    serde_json::from_str(black_box(&json)).unwrap();
                record
            })
        });

        let json = assets::generated_blocks_json(hash_count, 24);
        c.bench_function(&format!("parse_generated_blocks_{}", hash_count), |b| {
            b.iter(|| {
                let record: GeneratedBlocksRecord =
                    serde_json::from_str(black_box(&json)).unwrap();
                record
            })
        });
    }
}

pub fn bench_collision_table(c: &mut Criterion) {
    for &hash_count in &[16, 64] {
        let record: GeneratedBlocksRecord =
            serde_json::from_str(&assets::generated_blocks_json(hash_count, 24)).unwrap();
        let statistics = GeneratedBlocksStatistics::new(record, "1024");

        c.bench_function(&format!("collision_table_{}", hash_count), |b| {
            b.iter(|| black_box(&statistics).collision_table().unwrap())
        });

        c.bench_function(&format!("line_charts_{}", hash_count), |b| {
            b.iter(|| black_box(&statistics).line_charts().unwrap())
        });

        let table = statistics.collision_table().unwrap();
        let mut report = DocxReport::new("Collision tables");
        report.add_table(&statistics.table_heading(), &table);
        c.bench_function(&format!("document_xml_{}", hash_count), |b| {
            b.iter(|| black_box(&report).document_xml().unwrap())
        });
    }
}
