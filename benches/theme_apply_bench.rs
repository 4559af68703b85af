use chart_theme::api::{ThemeEngine, theme_configuration};
use chart_theme::core::{ChartConfiguration, ChartKind, Dataset, Theme, merge_option_sets};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_configuration(
    kind: ChartKind,
    dataset_count: usize,
    points: usize,
) -> ChartConfiguration {
    let labels: Vec<String> = (0..points).map(|i| format!("label-{i}")).collect();
    let datasets = (0..dataset_count)
        .map(|d| {
            let data = (0..points).map(|i| (i * (d + 1)) as f64).collect();
            Dataset::series(format!("series-{d}"), data)
        })
        .collect();
    ChartConfiguration::new(kind)
        .with_labels(labels)
        .with_datasets(datasets)
}

fn bench_apply_theme_line_64_series(c: &mut Criterion) {
    let engine = ThemeEngine::new();
    let config = generated_configuration(ChartKind::Line, 64, 128);

    c.bench_function("apply_theme_line_64_series", |b| {
        b.iter(|| {
            let _ = engine
                .apply_theme(black_box(&config), None)
                .expect("apply theme");
        })
    });
}

fn bench_segment_colors_doughnut_2k_points(c: &mut Criterion) {
    let theme = Theme::builtin_default();
    let config = generated_configuration(ChartKind::Doughnut, 4, 2_000);

    c.bench_function("segment_colors_doughnut_2k_points", |b| {
        b.iter(|| {
            let _ = theme_configuration(black_box(&config), black_box(&theme));
        })
    });
}

fn bench_merge_builtin_option_sets(c: &mut Criterion) {
    let theme = Theme::builtin_default();
    let type_options = theme.type_options_for(ChartKind::Radar).cloned();

    c.bench_function("merge_builtin_option_sets", |b| {
        b.iter(|| {
            let _ = merge_option_sets(black_box(&[
                theme.global_options.as_ref(),
                type_options.as_ref(),
                theme.global_options.as_ref(),
            ]));
        })
    });
}

criterion_group!(
    benches,
    bench_apply_theme_line_64_series,
    bench_segment_colors_doughnut_2k_points,
    bench_merge_builtin_option_sets
);
criterion_main!(benches);
