use num_traits::Float;

/// Euclidean norm of a vector.
pub fn norm<F: Float>(v: &[F]) -> F {
    let mut s = F::zero();
    for &x in v {
        s = s + x * x;
    }
    s.sqrt()
}

/// Dot product of two vectors.
pub fn dot<F: Float>(a: &[F], b: &[F]) -> F {
    debug_assert_eq!(a.len(), b.len());
    let mut s = F::zero();
    for i in 0..a.len() {
        s = s + a[i] * b[i];
    }
    s
}

/// In-place `y += alpha * x`.
pub fn axpy<F: Float>(alpha: F, x: &[F], y: &mut [F]) {
    debug_assert_eq!(x.len(), y.len());
    for i in 0..x.len() {
        y[i] = y[i] + alpha * x[i];
    }
}

/// `x + alpha * d` as a new vector.
pub fn scaled_sum<F: Float>(x: &[F], alpha: F, d: &[F]) -> Vec<F> {
    debug_assert_eq!(x.len(), d.len());
    let mut out = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        out.push(x[i] + alpha * d[i]);
    }
    out
}
