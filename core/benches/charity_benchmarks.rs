use charity_connect::{
  category_breakdown, DashboardSummary, DonationItem, DonationService, DonationStatus, DonationStore,
};
use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime; // To run async code within Criterion

const CATEGORY_POOL: [&str; 6] = ["Clothing", "Food", "Books", "Toys", "Medical", "Other"];

fn synthetic_donations(count: usize) -> Vec<DonationItem> {
  let now = Utc::now();
  (0..count)
    .map(|i| DonationItem {
      id: format!("d{}", i),
      item_name: format!("item {}", i),
      description: String::new(),
      quantity: (i % 50) as i32,
      category: CATEGORY_POOL[i % CATEGORY_POOL.len()].to_string(),
      image_url: String::new(),
      donor_name: format!("donor {}", i % 97),
      donor_id: format!("user-{}", i % 97),
      donor_phone_number: String::new(),
      donor_address: String::new(),
      status: if i % 3 == 0 { DonationStatus::Pending } else { DonationStatus::Approved },
      // Interleave timestamps so listing has real sorting work to do.
      submitted_at: now - Duration::minutes(((i * 7919) % count) as i64),
    })
    .collect()
}

// --- Benchmark Functions ---

fn bench_aggregation(c: &mut Criterion) {
  let mut group = c.benchmark_group("DashboardAggregation");
  for size in [10usize, 1_000, 10_000].iter() {
    let donations = synthetic_donations(*size);
    group.throughput(Throughput::Elements(*size as u64));
    group.bench_with_input(BenchmarkId::new("summary", size), &donations, |b, d| {
      b.iter(|| criterion::black_box(DashboardSummary::from_donations(d)))
    });
    group.bench_with_input(BenchmarkId::new("category_breakdown", size), &donations, |b, d| {
      b.iter(|| criterion::black_box(category_breakdown(d)))
    });
  }
  group.finish();
}

fn bench_service_listing(c: &mut Criterion) {
  let mut group = c.benchmark_group("ServiceListing");
  let rt = Runtime::new().unwrap();

  for size in [10usize, 1_000, 10_000].iter() {
    let service = DonationService::without_latency(DonationStore::from_records(synthetic_donations(*size)));
    group.throughput(Throughput::Elements(*size as u64));
    group.bench_with_input(BenchmarkId::new("list", size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let service = service.clone();
        async move { criterion::black_box(service.list().await.unwrap()) }
      });
    });
    group.bench_with_input(BenchmarkId::new("list_by_donor", size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let service = service.clone();
        async move { criterion::black_box(service.list_by_donor("user-42").await.unwrap()) }
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_aggregation, bench_service_listing);
criterion_main!(benches);
