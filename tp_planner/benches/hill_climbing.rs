use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde_json::json;
use tp_domain::*;
use tp_model::*;
use tp_planner::*;

// One entry component with 100 flags, each flag is set by its own action and
// every set flag unlocks a follow-up action on a created component.
fn flag_model() -> ComponentModel {
    let mut m = ComponentModel::new();
    m.add_component_type("Panel", Some(EntryComponent::new("panel").with_state(json!({}))))
        .unwrap();
    m.add_component_type("Lamp", None).unwrap();

    let mut flags: Vec<usize> = (0..100).collect();
    // shuffle so the order of possible actions differs from the flag order.
    flags.shuffle(&mut thread_rng());

    for i in flags {
        let flag = format!("flag_{i}");
        let lamp = format!("lamp_{i}");
        m.add_action(
            "Panel",
            &format!("set_{i}"),
            Condition::not_equals(&flag, json!(true)),
            vec![
                Effect::assign(&flag, json!(true)),
                Effect::create("Lamp", &lamp, json!({"on": false})),
            ],
        )
        .unwrap();
    }
    m.add_action(
        "Lamp",
        "toggle",
        Condition::equals("on", json!(false)),
        vec![Effect::assign("on", json!(true))],
    )
    .unwrap();
    m
}

fn bench_hill_climbing(model: ComponentModel) {
    let discovered = model.discovered_actions().unwrap();
    let refs = vec![Plan::new(discovered.iter().cloned().collect())];
    let outcome = create_plans(model, refs, discovered, &PlannerConfig::default()).unwrap();
    let _ = outcome.minimum_plans();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let model = flag_model();
    c.bench_function("hill_climbing", |b| {
        b.iter(|| bench_hill_climbing(model.clone()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
