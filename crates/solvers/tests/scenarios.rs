mod support;

use descent_core::{CostFunction, Objective};
use descent_solvers::{
    Action, Event, Status, bfgs, conjugate_gradient, gradient_descent, nelder_mead,
};
use rand::{SeedableRng, rngs::StdRng};

use support::{Sphere, Trace, rosenbrock, rosenbrock_estimated, sphere};

fn assert_near_optimum(x: &[f64], optimum: &[f64], tol: f64) {
    for (xi, oi) in x.iter().zip(optimum) {
        assert!((xi - oi).abs() < tol, "{x:?} is not within {tol} of {optimum:?}");
    }
}

#[test]
fn gradient_descent_solves_sphere_from_random_starts() {
    let f = sphere();
    let config = gradient_descent::Config::new(0.1).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..5 {
        let x0 = f.random_solution(&mut rng);
        assert!(!f.is_out_of_bounds(&x0));

        let solution = gradient_descent::minimize_cost_function(&f, &x0, &config, 499, ()).unwrap();

        assert_eq!(solution.status, Status::Terminated);
        assert_eq!(solution.iters, 500);
        assert!(solution.cost() < 1e-6, "cost {} from {x0:?}", solution.cost());
    }
}

#[test]
fn gradient_descent_uses_analytic_gradient() {
    let f = sphere();
    let config = gradient_descent::Config::new(0.1).unwrap();

    gradient_descent::minimize_cost_function(&f, &[1.0, -2.0, 3.0], &config, 9, ()).unwrap();

    // One evaluation for the start and one per iteration.
    assert_eq!(f.evaluations(), 11);
}

/// Fletcher-Reeves carrying the full-length previous direction.
fn fletcher_reeves() -> conjugate_gradient::Config {
    conjugate_gradient::Config::default()
        .with_previous_direction(conjugate_gradient::PreviousDirection::Full)
}

#[test]
fn conjugate_gradient_solves_rosenbrock() {
    let f = rosenbrock();

    for x0 in [[-1.2, 1.0], [0.0, 0.0]] {
        let solution = conjugate_gradient::minimize_cost_function(
            &f,
            &x0,
            &fletcher_reeves(),
            1000,
            (),
        )
        .unwrap();

        assert_near_optimum(solution.x(), &[1.0, 1.0], 1e-3);
    }
}

#[test]
fn conjugate_gradient_solves_rosenbrock_with_estimated_gradient() {
    let f = rosenbrock_estimated();

    let solution = conjugate_gradient::minimize_cost_function(
        &f,
        &[-1.2, 1.0],
        &fletcher_reeves(),
        1000,
        (),
    )
    .unwrap();

    assert_near_optimum(solution.x(), &[1.0, 1.0], 1e-3);
}

#[test]
fn bfgs_solves_rosenbrock() {
    for (f, tol) in [(rosenbrock(), 1e-6), (rosenbrock_estimated(), 1e-4)] {
        let solution =
            bfgs::minimize_cost_function(&f, &[-1.2, 1.0], &bfgs::Config::default(), 100, ())
                .unwrap();

        assert_near_optimum(solution.x(), &[1.0, 1.0], tol);
    }
}

#[test]
fn nelder_mead_solves_sphere_and_rosenbrock() {
    let config = nelder_mead::Config::default();

    let solution =
        nelder_mead::minimize_cost_function(&sphere(), &[1.0, -2.0, 3.0], &config, 300, ())
            .unwrap();
    assert!(solution.cost() < 1e-12);

    let solution =
        nelder_mead::minimize_cost_function(&rosenbrock(), &[-1.2, 1.0], &config, 300, ()).unwrap();
    assert_near_optimum(solution.x(), &[1.0, 1.0], 1e-4);
}

#[test]
fn nelder_mead_first_iteration_beats_initial_simplex() {
    let f = CostFunction::with_uniform_bounds(Sphere, 2, -5.12, 5.12);
    let solution =
        nelder_mead::minimize_cost_function(&f, &[1.0, 2.0], &nelder_mead::Config::default(), 0, ())
            .unwrap();

    // Initial vertices cost 4, 8, and 10.
    assert!(solution.cost() < 10.0);
    assert!(solution.cost() < 4.0);
}

#[test]
fn best_cost_is_monotone_for_every_solver() {
    let f = rosenbrock();
    let x0 = [-1.2, 1.0];
    let start_cost = f.objective().cost(&x0);

    let mut trace = Trace::default();
    gradient_descent::minimize_cost_function(
        &f,
        &x0,
        &gradient_descent::Config::new(1e-3).unwrap(),
        200,
        trace.observer(),
    )
    .unwrap();
    trace.assert_monotone(start_cost);

    let mut trace = Trace::default();
    conjugate_gradient::minimize_cost_function(
        &f,
        &x0,
        &conjugate_gradient::Config::default(),
        200,
        trace.observer(),
    )
    .unwrap();
    trace.assert_monotone(start_cost);
    assert!(trace.stepped.windows(2).all(|pair| pair[1] <= pair[0]));

    let mut trace = Trace::default();
    bfgs::minimize_cost_function(&f, &x0, &bfgs::Config::default(), 200, trace.observer()).unwrap();
    trace.assert_monotone(start_cost);
    assert!(trace.stepped.windows(2).all(|pair| pair[1] <= pair[0]));

    let mut trace = Trace::default();
    nelder_mead::minimize_cost_function(
        &f,
        &x0,
        &nelder_mead::Config::default(),
        200,
        trace.observer(),
    )
    .unwrap();
    // Nelder-Mead seeds its best from the initial simplex, not from `x0`.
    assert!(!trace.updates.is_empty());
    assert!(trace.updates.windows(2).all(|pair| pair[1].0 < pair[0].0));
}

#[test]
fn termination_predicate_sees_improvements() {
    let f = sphere();
    let config = gradient_descent::Config::new(0.1).unwrap();
    let mut seen = Vec::new();
    let termination = |improvement: Option<f64>, iter: usize| {
        seen.push((improvement, iter));
        improvement.is_some_and(|delta| delta < 1e-3)
    };

    let solution = gradient_descent::minimize_unobserved(
        &f,
        f.bounds(),
        &[1.0, -2.0, 3.0],
        &config,
        termination,
    )
    .unwrap();

    assert_eq!(seen[0], (None, 0));
    assert!(seen.iter().enumerate().all(|(i, &(_, iter))| i == iter));
    assert!(seen[1..].iter().all(|(improvement, _)| improvement.is_some()));
    assert_eq!(solution.iters, seen.len() - 1);
    assert!(solution.cost() < 1e-2);
}

#[test]
fn observer_can_stop_any_solver() {
    let stop_at_third = |event: &Event<'_>| (event.iter() == 2).then_some(Action::StopEarly);
    let f = rosenbrock();
    let x0 = [-1.2, 1.0];

    let solutions = [
        gradient_descent::minimize_cost_function(&f, &x0, &Default::default(), 50, stop_at_third),
        conjugate_gradient::minimize_cost_function(&f, &x0, &Default::default(), 50, stop_at_third),
        bfgs::minimize_cost_function(&f, &x0, &Default::default(), 50, stop_at_third),
        nelder_mead::minimize_cost_function(&f, &x0, &Default::default(), 50, stop_at_third),
    ];

    for solution in solutions {
        let solution = solution.unwrap();
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
    }
}

#[test]
fn sphere_objective_matches_its_gradient() {
    let gradient = Sphere.gradient(&[1.0, -2.0, 0.5]).unwrap();
    assert_eq!(gradient, vec![2.0, -4.0, 1.0]);
}
