//! Gradient approximation on the unit sphere, checked against the
//! closed-form Rayleigh-quotient gradient.
//!
//! For f(p) = pᵀAp on S^{n-1} the Riemannian gradient is known exactly:
//! grad f(p) = 2(Ap − p·pᵀAp). The intrinsic differencer and the embedding
//! converter must both reproduce it to their scheme tolerances.

use manigrad_core::prelude::*;
use manigrad_manifolds::Sphere;
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

const AMBIENT_DIM: usize = 201;

fn symmetric_matrix(n: usize, rng: &mut StdRng) -> DMatrix<f64> {
    let mut a = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let value = rng.gen_range(-1.0..1.0);
            a[(i, j)] = value;
            a[(j, i)] = value;
        }
    }
    a
}

fn closed_form_gradient(a: &DMatrix<f64>, p: &DVector<f64>) -> DVector<f64> {
    let ap = a * p;
    (&ap - p * p.dot(&ap)) * 2.0
}

struct Fixture {
    sphere: Sphere,
    f: QuadraticForm<f64>,
    point: DVector<f64>,
    exact: DVector<f64>,
}

fn fixture() -> Fixture {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = symmetric_matrix(AMBIENT_DIM, &mut rng);
    let sphere = Sphere::new(AMBIENT_DIM).unwrap();
    let point: DVector<f64> = sphere.random_point(&mut rng);
    let exact = closed_form_gradient(&a, &point);
    Fixture {
        sphere,
        f: QuadraticForm::new(a),
        point,
        exact,
    }
}

#[test]
fn forward_difference_matches_closed_form() {
    let fx = fixture();
    let differencer = TangentBasisDifferencer::new(1e-6, DifferenceScheme::Forward).unwrap();
    let approx = approximate_gradient(&fx.sphere, &fx.f, &fx.point, &differencer).unwrap();

    // Truncation is O(h); with h = 1e-6 and curvature of order ||A|| the
    // aggregate error stays well below 1e-2.
    let error = (&approx - &fx.exact).norm();
    assert!(
        error < 1e-2,
        "forward-difference error too large: {error:e}"
    );
}

#[test]
fn central_difference_is_strictly_more_accurate() {
    let fx = fixture();
    let forward = TangentBasisDifferencer::new(1e-6, DifferenceScheme::Forward).unwrap();
    let central = TangentBasisDifferencer::new(1e-6, DifferenceScheme::Central).unwrap();

    let forward_error =
        (approximate_gradient(&fx.sphere, &fx.f, &fx.point, &forward).unwrap() - &fx.exact).norm();
    let central_error =
        (approximate_gradient(&fx.sphere, &fx.f, &fx.point, &central).unwrap() - &fx.exact).norm();

    // O(h²) beats O(h) at the same h, well above the roundoff floor.
    assert!(
        central_error < forward_error,
        "central ({central_error:e}) should beat forward ({forward_error:e})"
    );
    assert!(
        central_error < 1e-5,
        "central-difference error too large: {central_error:e}"
    );
}

#[test]
fn embedding_converter_equals_projection_on_isometric_embedding() {
    let fx = fixture();
    let backend = FiniteDifferenceBackend::new(1e-6, DifferenceScheme::Central).unwrap();
    let converter = EmbeddingGradientConverter::new(backend);

    let converted = converter
        .riemannian_gradient(&fx.sphere, &fx.f, &fx.point)
        .unwrap();

    // The sphere is isometrically embedded: the converter output is the
    // bare tangent projection of the ambient gradient, bit for bit.
    let ambient = converter
        .backend()
        .ambient_gradient(&fx.f, &fx.point)
        .unwrap();
    let projected = fx.sphere.project_tangent(&fx.point, &ambient).unwrap();
    assert_eq!(converted, projected);

    // And the representer change alone is a no-op.
    let representer = fx
        .sphere
        .change_representer(&fx.point, &projected)
        .unwrap();
    assert_eq!(representer, projected);

    // The converted gradient still matches the closed form.
    let error = (&converted - &fx.exact).norm();
    assert!(error < 1e-5, "converted gradient error: {error:e}");
}

#[test]
fn identical_inputs_give_identical_gradients() {
    let fx = fixture();
    let differencer = TangentBasisDifferencer::new(1e-6, DifferenceScheme::Central).unwrap();

    let first = approximate_gradient(&fx.sphere, &fx.f, &fx.point, &differencer).unwrap();
    let second = approximate_gradient(&fx.sphere, &fx.f, &fx.point, &differencer).unwrap();
    // Deterministic objective and scheme: bit-identical output.
    assert_eq!(first, second);
}
