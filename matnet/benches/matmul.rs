#[macro_use]
extern crate bencher;

use bencher::Bencher;
use matnet::dtype::Element;
use matnet::matrix::Matrix;
use rand::SeedableRng;
use rand::distributions::Uniform;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;

const SIZE_SM: usize = 64;
const SIZE_MD: usize = 256;
const SIZE_LG: usize = 512;

fn square<T: Element + SampleUniform>(rng: &mut StdRng, size: usize) -> Matrix<T> {
    let dist = Uniform::new(T::from_f64(-1.0), T::ONE);
    Matrix::from_distribution(rng, dist, size, size)
}

macro_rules! impl_bench {
    ($name:ident, $ty:ty, $size:expr) => {
        fn $name(bench: &mut Bencher) {
            let mut rng = StdRng::seed_from_u64(0xbe7c4);
            let a = square::<$ty>(&mut rng, $size);
            let b = square::<$ty>(&mut rng, $size);
            bench.iter(|| a.matmul(&b).unwrap())
        }
    };
}

impl_bench!(matmul_f32_sm, f32, SIZE_SM);
impl_bench!(matmul_f32_md, f32, SIZE_MD);
impl_bench!(matmul_f32_lg, f32, SIZE_LG);
benchmark_group!(matmul_f32, matmul_f32_sm, matmul_f32_md, matmul_f32_lg);

impl_bench!(matmul_f64_sm, f64, SIZE_SM);
impl_bench!(matmul_f64_md, f64, SIZE_MD);
impl_bench!(matmul_f64_lg, f64, SIZE_LG);
benchmark_group!(matmul_f64, matmul_f64_sm, matmul_f64_md, matmul_f64_lg);

benchmark_main!(matmul_f32, matmul_f64);
