use assert_approx_eq::assert_approx_eq;
use function_plotter::constants::{NOTEBOOK_FAMILIES, SIDEBAR_FAMILIES};
use function_plotter::*;
use more_asserts::{assert_le, assert_lt};

#[test]
fn sine_over_default_range() {
    let parameters = ParameterSet::<f64>::from_iter([("a", 1.0), ("b", 1.0), ("c", 0.0)]);
    let domain = Domain::<f64>::new(-10.0, 10.0).with_samples(1000);
    let sample = sample(FunctionFamily::Sine, &parameters, &domain).unwrap();

    assert_eq!(sample.len(), 1000);
    assert_approx_eq!(sample.points()[0].1, 0.5440, 1e-4);

    let (_, y_near_zero) = sample
        .iter()
        .min_by(|a, b| a.0.abs().total_cmp(&b.0.abs()))
        .copied()
        .unwrap();
    assert_le!(y_near_zero.abs(), 0.011);
}

#[test]
fn linear_with_three_points_is_exact() {
    let parameters = ParameterSet::<f64>::from_iter([("a", 1.0), ("b", 0.0)]);
    let domain = Domain::<f64>::new(-10.0, 10.0).with_samples(3);
    let sample = sample(FunctionFamily::Linear, &parameters, &domain).unwrap();
    assert_eq!(
        sample.points(),
        &[(-10.0, -10.0), (0.0, 0.0), (10.0, 10.0)]
    );
}

#[test]
fn logarithm_does_not_fail_for_non_positive_x() {
    let parameters = ParameterSet::<f64>::from_iter([("a", 1.0), ("b", 0.0)]);
    let domain = Domain::<f64>::new(-10.0, 10.0).with_samples(5);
    let sample = sample(FunctionFamily::Logarithmic, &parameters, &domain).unwrap();

    assert_eq!(sample.len(), 5);
    for (x, y) in &sample {
        if *x <= 0.0 {
            assert!(y.is_nan() || *y == f64::NEG_INFINITY, "x = {x}, y = {y}");
        } else {
            assert_approx_eq!(*y, x.ln());
        }
    }
}

#[test]
fn malformed_range_text_plots_default_range() {
    let mut session = PlotSession::new(FunctionFamily::Sine);
    session.set_range_text("abc,def");
    assert_eq!(session.domain(), Domain::<f64>::new(-10.0, 10.0));

    let sample = session.replot().unwrap();
    assert_eq!(sample.points()[0].0, -10.0);
    assert_eq!(sample.points()[sample.len() - 1].0, 10.0);
}

#[test]
fn domain_endpoints_and_order_hold_for_many_shapes() {
    let parameters = FunctionFamily::Linear.default_parameters::<f64>();
    for (x_min, x_max) in [
        (-10.0_f64, 10.0),
        (0.0, 1e-3),
        (-1e6, 1e6),
        (2.5, 2.75),
        (-1e308, 1e308),
    ] {
        for samples in [2, 3, 17, 1000] {
            let domain = Domain::<f64>::new(x_min, x_max).with_samples(samples);
            let sample = sample(FunctionFamily::Linear, &parameters, &domain).unwrap();
            assert_eq!(sample.len(), samples);
            assert_eq!(sample.points()[0].0, x_min);
            assert_eq!(sample.points()[samples - 1].0, x_max);
            let xs = sample.xs().collect::<Vec<_>>();
            for pair in xs.windows(2) {
                assert_lt!(pair[0], pair[1]);
            }
        }
    }
}

#[test]
fn reversed_domain_is_rejected() {
    let parameters = FunctionFamily::Sine.default_parameters::<f64>();
    let domain = Domain::<f64>::new(10.0, -10.0);
    assert!(matches!(
        sample(FunctionFamily::Sine, &parameters, &domain),
        Err(Error::InvalidDomain { .. })
    ));
}

#[test]
fn missing_parameter_message_names_key() {
    let parameters = ParameterSet::<f64>::from_iter([("b", 1.0)]);
    let error = sample(FunctionFamily::Linear, &parameters, &Domain::fallback()).unwrap_err();
    assert_eq!(error.to_string(), "Linear requires parameter `a`");
}

#[test]
fn catalog_families_plot_with_defaults() {
    for family in SIDEBAR_FAMILIES.iter().chain(NOTEBOOK_FAMILIES.iter()) {
        let session = PlotSession::new(*family);
        let sample = session.replot().unwrap();
        assert_eq!(sample.len(), constants::DEFAULT_SAMPLE_COUNT);
    }
}
