//! Compares `ArrayList` with `Vec` and `SmallVec` on the operations they share.

use arraylist::{ArrayList, List};
use core::hint;
use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use smallvec::SmallVec;
use std::sync::OnceLock;

use rand::Rng;

const SMALL_SIZE: usize = 16;
const LARGE_SIZE: usize = 40000;

/// A function used to generate a random amount of data.
///
/// Random inputs keep the compiler from specializing on known lengths.
#[inline(never)]
fn gen_one(start: usize, end: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(start..end)
}

/// Element count of the small tests, randomly chosen in 14-15.
static SMALL_BOUND: OnceLock<usize> = OnceLock::new();

/// Element count of the large tests, randomly chosen in 36000-36002.
static LARGE_BOUND: OnceLock<usize> = OnceLock::new();

/// Generate an array of random content of a specified length.
#[inline(never)]
fn gen_rand(len: usize, start: u64, end: u64) -> Box<[u64]> {
    let mut rng = rand::rng();
    let mut vec: Vec<u64> = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(rng.random_range(start..end));
    }
    vec.into_boxed_slice()
}

/// The operations every benchmarked container provides.
///
/// Out of range indices are bugs in the benchmark, so the checked
/// `ArrayList` results are unwrapped.
trait ListLike {
    fn new_empty() -> Self;
    fn new_small() -> Self;
    fn new_large() -> Self;
    fn add(&mut self, value: u64);
    fn add_at(&mut self, value: u64, index: usize);
    fn remove(&mut self, index: usize) -> u64;
    fn get(&self, index: usize) -> u64;
    fn clear(&mut self);
}

impl ListLike for ArrayList<u64> {
    #[inline(always)]
    fn new_empty() -> Self {
        Self::with_capacity(0).unwrap()
    }
    #[inline(always)]
    fn new_small() -> Self {
        Self::with_capacity(SMALL_SIZE).unwrap()
    }
    #[inline(always)]
    fn new_large() -> Self {
        Self::with_capacity(LARGE_SIZE).unwrap()
    }
    #[inline(always)]
    fn add(&mut self, value: u64) {
        List::add(self, value)
    }
    #[inline(always)]
    fn add_at(&mut self, value: u64, index: usize) {
        List::add_at(self, value, index).unwrap()
    }
    #[inline(always)]
    fn remove(&mut self, index: usize) -> u64 {
        List::remove(self, index).unwrap()
    }
    #[inline(always)]
    fn get(&self, index: usize) -> u64 {
        *List::get(self, index).unwrap()
    }
    #[inline(always)]
    fn clear(&mut self) {
        ArrayList::clear(self)
    }
}

macro_rules! impl_list_like {
    ($name:ty, $empty:expr) => {
        impl ListLike for $name {
            #[inline(always)]
            fn new_empty() -> Self {
                $empty
            }
            #[inline(always)]
            fn new_small() -> Self {
                Self::with_capacity(SMALL_SIZE)
            }
            #[inline(always)]
            fn new_large() -> Self {
                Self::with_capacity(LARGE_SIZE)
            }
            #[inline(always)]
            fn add(&mut self, value: u64) {
                self.push(value)
            }
            #[inline(always)]
            fn add_at(&mut self, value: u64, index: usize) {
                self.insert(index, value)
            }
            #[inline(always)]
            fn remove(&mut self, index: usize) -> u64 {
                <$name>::remove(self, index)
            }
            #[inline(always)]
            fn get(&self, index: usize) -> u64 {
                self[index]
            }
            #[inline(always)]
            fn clear(&mut self) {
                <$name>::clear(self)
            }
        }
    };
}

impl_list_like!(Vec<u64>, Vec::new());
impl_list_like!(SmallVec<[u64; SMALL_SIZE]>, SmallVec::new());

macro_rules! gen_bench_group {
    ($c:ident => $fn_name:ident) => {{
        let mut group_new = $c.benchmark_group(stringify!($fn_name));
        group_new.bench_function("ArrayList", |b| $fn_name::<ArrayList<u64>>(b));
        group_new.bench_function("Vec", |b| $fn_name::<Vec<u64>>(b));
        group_new.bench_function("SmallVec", |b| {
            $fn_name::<SmallVec<[u64; SMALL_SIZE]>>(b)
        });
    }};
}

fn bench_list(c: &mut Criterion) {
    SMALL_BOUND.get_or_init(|| gen_one(14, 16));
    LARGE_BOUND.get_or_init(|| gen_one(36000, 36003));

    gen_bench_group!(c => new_empty);
    gen_bench_group!(c => new_large);
    gen_bench_group!(c => add_small);
    gen_bench_group!(c => add_large);
    gen_bench_group!(c => add_large_from_empty);
    gen_bench_group!(c => add_at_large);
    gen_bench_group!(c => remove_large);
    gen_bench_group!(c => get_large);
}

/// Creation of an empty container.
///
/// `ArrayList` starts with a zero capacity block here, like the others.
#[inline(never)]
fn new_empty<T: ListLike>(b: &mut Bencher) {
    b.iter(|| hint::black_box(T::new_empty()));
}

/// Creation with capacity `40000`, every container allocates.
#[inline(never)]
fn new_large<T: ListLike>(b: &mut Bencher) {
    b.iter(|| hint::black_box(T::new_large()));
}

/// Pre allocated, only measures `add`.
///
/// The data volume is 14-15.
#[inline(never)]
fn add_small<T: ListLike>(b: &mut Bencher) {
    let mut list = T::new_small();
    let data = gen_rand(*SMALL_BOUND.get().unwrap(), 0, 9999);
    let index = gen_one(0, *SMALL_BOUND.get().unwrap());

    b.iter(|| {
        list.clear();
        for item in &data {
            list.add(*item);
        }
        hint::black_box(list.get(index))
    });
}

/// Pre allocated, only measures `add`.
///
/// The data volume is 36000-36002.
#[inline(never)]
fn add_large<T: ListLike>(b: &mut Bencher) {
    let mut list = T::new_large();
    let data = gen_rand(*LARGE_BOUND.get().unwrap(), 0, 9999);
    let index = gen_rand(10, 0, *LARGE_BOUND.get().unwrap() as _);

    b.iter(|| {
        let mut counter = 0u64;
        list.clear();
        for item in &data {
            list.add(*item);
        }
        for item in &index {
            counter += list.get(*item as usize);
        }
        hint::black_box(counter)
    });
}

/// No pre allocation, measures `add` including every growth step.
///
/// The data volume is 36000-36002.
#[inline(never)]
fn add_large_from_empty<T: ListLike>(b: &mut Bencher) {
    let data = gen_rand(*LARGE_BOUND.get().unwrap(), 0, 9999);
    let index = gen_rand(10, 0, *LARGE_BOUND.get().unwrap() as _);

    b.iter(|| {
        let mut list = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            list.add(*item);
        }
        for item in &index {
            counter += list.get(*item as usize);
        }
        hint::black_box(counter)
    });
}

/// Fills `36000` elements, then measures a few shifting inserts.
#[inline(never)]
fn add_at_large<T: ListLike>(b: &mut Bencher) {
    let mut list = T::new_large();
    let data = gen_rand(36000, 0, 9999);
    let num = *LARGE_BOUND.get().unwrap();
    let index = gen_one(0, 36004);

    b.iter(|| {
        list.clear();
        for item in &data {
            list.add(*item);
        }
        list.add_at(6, num % 12 + 35000);
        list.add_at(7, num % 20 + 20000);
        list.add_at(8, num % 16 + 10000);
        list.add_at(11, num % 13);
        hint::black_box(list.get(index))
    });
}

/// Fills `36050` elements, then measures a few shifting removals.
#[inline(never)]
fn remove_large<T: ListLike>(b: &mut Bencher) {
    let mut list = T::new_large();
    let data = gen_rand(36050, 0, 9999);
    let num = *LARGE_BOUND.get().unwrap();
    let index = gen_one(0, 36000);

    b.iter(|| {
        let mut counter = 0u64;
        list.clear();
        for item in &data {
            list.add(*item);
        }
        counter += list.remove(num % 12 + 35000);
        counter += list.remove(num % 20 + 20000);
        counter += list.remove(num % 16 + 10000);
        counter += list.remove(num % 13);
        counter += list.get(index);
        hint::black_box(counter)
    });
}

/// Random reads, no reallocation.
#[inline(never)]
fn get_large<T: ListLike>(b: &mut Bencher) {
    let mut list = T::new_large();
    for item in gen_rand(36000, 0, 9999).iter() {
        list.add(*item);
    }
    let range = gen_rand(2000, 0, 36000);

    b.iter(|| {
        let mut counter = 0u64;
        for item in &range {
            counter = counter.wrapping_add(list.get(*item as usize));
        }
        hint::black_box(counter)
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(200)
        .warm_up_time(core::time::Duration::from_secs(3))
        .measurement_time(core::time::Duration::from_secs(8))
        .confidence_level(0.96)
        .noise_threshold(0.04);
    targets = bench_list,
}
criterion_main!(benches);
