//! 집계기 벤치마크
//!
//! 라인 유형별 ingest 비용과 리포트 렌더링 비용을 측정합니다.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use chatfood_log_analyzer::{ReportRenderer, StatisticsAggregator};

/// 모든 추출기와 에러 매처를 거치는 라인
const FULL_LINE: &str =
    "2024-01-15 12:00:00 ERROR API 호출 API: recommend 소요시간: 1200ms Failed to connect upstream";

/// 어떤 패턴에도 걸리지 않는 라인
const PLAIN_LINE: &str = "stack trace continuation at com.chatfood.service.RecommendationService";

/// 사용자 액션 라인
const ACTION_LINE: &str = "2024-01-15 12:00:01 INFO 사용자 액션 - 액션: login userId=42";

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    group.throughput(Throughput::Elements(1));

    for (name, line) in [
        ("full_line", FULL_LINE),
        ("plain_line", PLAIN_LINE),
        ("action_line", ACTION_LINE),
    ] {
        group.bench_function(name, |b| {
            let mut aggregator = StatisticsAggregator::new().unwrap();
            b.iter(|| aggregator.ingest(black_box(line)))
        });
    }

    // 1000건 혼합 처리량
    group.throughput(Throughput::Elements(1000));
    group.bench_function("mixed_throughput_1000", |b| {
        b.iter(|| {
            let mut aggregator = StatisticsAggregator::new().unwrap();
            for i in 0..1000 {
                let line = match i % 3 {
                    0 => FULL_LINE,
                    1 => PLAIN_LINE,
                    _ => ACTION_LINE,
                };
                aggregator.ingest(black_box(line));
            }
            aggregator.into_statistics()
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut aggregator = StatisticsAggregator::new().unwrap();
    for _ in 0..10_000 {
        aggregator.ingest(FULL_LINE);
        aggregator.ingest(ACTION_LINE);
    }
    let stats = aggregator.into_statistics();
    let renderer = ReportRenderer::default();

    c.bench_function("render_text_report", |b| {
        b.iter(|| renderer.render_to_string(black_box(&stats)))
    });
}

criterion_group!(benches, bench_ingest, bench_render);
criterion_main!(benches);
