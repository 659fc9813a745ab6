use criterion::{criterion_group, criterion_main, Criterion};
use galleria::dataset::ImageRecord;
use galleria::scene::image_object::ImageObject;
use galleria::settings::AnimationOptions;
use galleria::util::{damp, damp_vec3};
use glam::Vec3;
use std::hint::black_box;

fn damp_benchmark(c: &mut Criterion) {
    c.bench_function("damp_scalar", |b| {
        b.iter(|| black_box(damp(black_box(0.2), 1.0, 2.0, 1.0 / 60.0)))
    });

    c.bench_function("damp_vec3", |b| {
        b.iter(|| {
            black_box(damp_vec3(
                black_box(Vec3::ZERO),
                Vec3::new(10.0, 5.0, -4.0),
                2.0,
                1.0 / 60.0,
            ))
        })
    });
}

fn object_update_benchmark(c: &mut Criterion) {
    let anim = AnimationOptions::default();
    let eye = Vec3::new(0.0, 0.0, 50.0);
    let mut group = c.benchmark_group("object_update");

    for count in [20, 100, 500].iter() {
        let mut objects: Vec<ImageObject> = (0..*count)
            .map(|i| {
                ImageObject::new(ImageRecord {
                    id: i,
                    thumb_path: format!("thumb/{i}.webp"),
                    highres_path: None,
                    position: [i as f32 * 3.0, 0.0, 0.0],
                })
            })
            .collect();

        group.bench_function(format!("{count}_entering"), |b| {
            b.iter(|| {
                for obj in &mut objects {
                    obj.update(black_box(1.0 / 60.0), eye, &anim);
                }
            })
        });

        // Settled objects skip the position damping entirely
        let mut settled: Vec<ImageObject> = objects.clone();
        for obj in &mut settled {
            for _ in 0..2000 {
                obj.update(1.0 / 60.0, eye, &anim);
            }
        }
        group.bench_function(format!("{count}_settled"), |b| {
            b.iter(|| {
                for obj in &mut settled {
                    obj.update(black_box(1.0 / 60.0), eye, &anim);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, damp_benchmark, object_update_benchmark);
criterion_main!(benches);
