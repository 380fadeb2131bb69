/// Integration tests for pricing whole usage directories
use gcosts::{
    error::PricingError,
    estimate::{Defaults, Estimator},
    pricing::{load_catalog, CostCalculator, Destination, Discount, PriceCatalog, Target},
    report::{export_csv, read_csv, render_table, LineItems, CSV_HEADER},
};
use std::path::Path;

const WEB_USAGE: &str = r#"
project: shop
region: europe-west4
discount: 0.9
monitoring:
  - name: metrics
    data: 1000
vpn-tunnels:
  - name: office
nat-gateways:
  - name: nat
    data: 100
traffic:
  - name: internet
    world: 1500
    china: 20
instances:
  - name: web
    type: e2-standard-2
    commitment: 1
    os: win
    external-ip: 1
    disks:
      - name: web-boot
        type: pd-balanced
        data: 50
buckets:
  - name: archive
    class: NEARLINE
    data: 1000
    retrieval: 100
"#;

const BATCH_USAGE: &str = r#"
instances:
  - name: batch
    type: e2-standard-2
    spot: true
  - name: stopped
    type: e2-standard-2
    terminated: true
    external-ip: 2
buckets:
  - name: shared
    class: STANDARD
    region: eu
    data: 100
"#;

fn catalog() -> PriceCatalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pricing.yml");
    load_catalog(path).unwrap()
}

fn usage_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_usage_directory_is_priced_in_order() {
    let catalog = catalog();
    // file names decide the processing order
    let dir = usage_dir(&[
        ("b-batch.yml", BATCH_USAGE),
        ("a-web.yml", WEB_USAGE),
        ("README.md", "not a usage file"),
    ]);

    let items = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap();

    let rows: Vec<(&str, &str, &str)> = items
        .iter()
        .map(|item| (item.name.as_str(), item.resource.as_str(), item.kind.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("metrics", "monitoring", "data"),
            ("office", "network", "vpn-tunnel"),
            ("nat", "network", "nat-gateway"),
            ("internet", "network", "traffic"),
            ("internet", "network", "traffic-cn"),
            ("web", "vm", "e2-standard-2"),
            ("web", "win", "e2-standard-2"),
            ("web", "network", "ip"),
            ("web-boot", "disk", "pd-balanced"),
            ("archive", "bucket", "NEARLINE"),
            ("archive", "retrieval", "NEARLINE"),
            ("batch", "vm", "e2-standard-2"),
            ("stopped", "network", "ip"),
            ("shared", "bucket", "STANDARD"),
        ]
    );

    let costs: Vec<f64> = items.iter().map(|item| item.cost).collect();
    let expected = [
        232.56, 32.85, 4.95, 157.716, 4.14, 30.537, 60.444, 3.285, 4.95, 9.0, 0.9, 14.68, 14.6,
        2.6,
    ];
    for (cost, expected) in costs.iter().zip(expected) {
        assert!(close(*cost, expected), "{} != {}", cost, expected);
    }
    assert!(close(items.total(), 573.212));
}

#[test]
fn test_line_items_carry_file_settings() {
    let catalog = catalog();
    let dir = usage_dir(&[("a-web.yml", WEB_USAGE), ("b-batch.yml", BATCH_USAGE)]);

    let items = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap()
        .into_vec();

    let web = items.iter().find(|item| item.name == "web").unwrap();
    assert_eq!(web.project, "shop");
    assert_eq!(web.region, "europe-west4");
    assert_eq!(web.commitment, 1);
    assert_eq!(web.discount, 0.9);
    assert_eq!(web.file, "a-web.yml");

    let batch = items.iter().find(|item| item.name == "batch").unwrap();
    assert_eq!(batch.project, "default-project-id");
    assert_eq!(batch.region, "us-central1");
    assert_eq!(batch.discount, 1.0);
    assert_eq!(batch.file, "b-batch.yml");

    let shared = items.iter().find(|item| item.name == "shared").unwrap();
    assert_eq!(shared.region, "eu");
}

#[test]
fn test_configured_defaults_apply() {
    let catalog = catalog();
    let dir = usage_dir(&[("batch.yml", "instances:\n  - type: e2-standard-2\n")]);
    let defaults = Defaults {
        project: "acme".to_string(),
        region: "europe-west4".to_string(),
        discount: 0.5,
    };

    let items = Estimator::new(&catalog, defaults)
        .run_dir(dir.path())
        .unwrap()
        .into_vec();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].project, "acme");
    assert_eq!(items[0].name, "default-instance-name");
    assert!(close(items[0].cost, 26.925));
}

#[test]
fn test_egress_destinations_are_banded_on_their_own_volume() {
    let catalog = catalog();
    // world traffic stays at zero while China and Australia cross 1 TiB
    let dir = usage_dir(&[(
        "egress.yml",
        "region: europe-west4\ntraffic:\n  - name: cdn\n    world: 0\n    china: 5000\n    australia: 2000\n",
    )]);

    let items = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap();

    let rows: Vec<(&str, f64)> = items
        .iter()
        .map(|item| (item.kind.as_str(), item.data))
        .collect();
    assert_eq!(rows, vec![("traffic-cn", 5000.0), ("traffic-au", 2000.0)]);

    let costs: Vec<f64> = items.iter().map(|item| item.cost).collect();
    // 1024 * 0.23 + 3976 * 0.22 and 1024 * 0.19 + 976 * 0.18
    assert!(close(costs[0], 1110.24), "{}", costs[0]);
    assert!(close(costs[1], 370.24), "{}", costs[1]);
    assert!(close(items.total(), 1480.48));
}

#[test]
fn test_australia_egress_third_band() {
    let catalog = catalog();
    let calc = CostCalculator::new(&catalog, "shop", "egress.yml");
    let target = Target {
        name: Some("cdn"),
        region: "europe-west4",
        discount: Discount::resolve(0.5),
    };
    let mut items = LineItems::new();

    let price = calc
        .price_egress(&mut items, &target, Destination::Australia, 12000.0)
        .unwrap();

    let expected = (1024.0 * 0.19 + 9216.0 * 0.18 + 1760.0 * 0.15) * 0.5;
    assert!(close(price, expected), "{} != {}", price, expected);
    let item = &items.into_vec()[0];
    assert_eq!(item.resource, "network");
    assert_eq!(item.kind, "traffic-au");
    assert_eq!(item.discount, 0.5);
}

#[test]
fn test_csv_export_round_trip() {
    let catalog = catalog();
    let dir = usage_dir(&[("a-web.yml", WEB_USAGE), ("b-batch.yml", BATCH_USAGE)]);
    let items = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap();

    let mut buffer = Vec::new();
    export_csv(&items, &mut buffer).unwrap();
    let text = String::from_utf8(buffer.clone()).unwrap();
    assert!(text.starts_with(&CSV_HEADER.join(";")));
    assert!(text.contains("shop;europe-west4;vm;e2-standard-2;web;30.537000;"));

    let parsed = read_csv(buffer.as_slice()).unwrap();
    assert_eq!(parsed.len(), items.len());
    for (written, parsed) in items.iter().zip(&parsed) {
        assert_eq!(written.name, parsed.name);
        assert_eq!(written.region, parsed.region);
        assert!(close(written.cost, parsed.cost));
    }
}

#[test]
fn test_render_table_lists_every_item() {
    let catalog = catalog();
    let dir = usage_dir(&[("b-batch.yml", BATCH_USAGE)]);
    let items = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap();

    let rendered = render_table(&items).to_string();
    assert!(rendered.contains("batch"));
    assert!(rendered.contains("14.68"));
    assert!(rendered.contains("STANDARD"));
}

#[test]
fn test_unknown_machine_type_aborts_run() {
    let catalog = catalog();
    let dir = usage_dir(&[("broken.yml", "instances:\n  - type: z9-mega\n")]);

    let err = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap_err();
    assert!(matches!(err, PricingError::NotFound { kind: "machine type", .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_price_list_is_not_a_usage_file() {
    let catalog = catalog();
    let pricing = std::fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pricing.yml"),
    )
    .unwrap();
    let dir = usage_dir(&[("pricing.yml", &pricing)]);

    let err = Estimator::new(&catalog, Defaults::default())
        .run_dir(dir.path())
        .unwrap_err();
    assert!(matches!(err, PricingError::Parse { .. }));
    assert_eq!(err.exit_code(), 8);
}

#[test]
fn test_missing_price_file() {
    let err = load_catalog("/definitely/not/here/pricing.yml").unwrap_err();
    assert!(matches!(err, PricingError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 9);
}
