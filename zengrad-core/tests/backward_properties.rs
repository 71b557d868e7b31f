mod common;

use approx::assert_relative_eq;
use zengrad_core::utils::testing::{check_grads_near, check_value_near};
use zengrad_core::{Value, ZenGradError};

#[test]
fn affine_expression_literal_scenario() -> Result<(), ZenGradError> {
    common::init_logger();
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let d = &a * &b;
    d.set_label("d");
    let e = &d + &c;
    e.set_label("e");
    let f = Value::with_label(-2.0, "f");
    let l = &e * &f;
    l.set_label("L");

    assert_eq!(l.data(), 4.0);
    l.backward()?;

    assert_eq!(l.grad(), 1.0);
    check_grads_near(
        &[
            (&a, 6.0),
            (&b, -4.0),
            (&c, -2.0),
            (&f, 4.0),
            (&d, -2.0),
            (&e, -2.0),
        ],
        1e-12,
    );
    Ok(())
}

#[test]
fn shared_subexpression_accumulates() -> Result<(), ZenGradError> {
    let a = Value::new(3.0);
    let b = &a * &a;
    b.backward()?;
    assert_eq!(a.grad(), 6.0);
    Ok(())
}

#[test]
fn diamond_graph_accumulates_both_paths() -> Result<(), ZenGradError> {
    // z = (x + x)^2 = 4x^2, dz/dx = 8x
    let x = Value::new(2.0);
    let y = &x + &x;
    let z = &y * &y;
    assert_eq!(z.data(), 16.0);
    z.backward()?;
    assert_eq!(y.grad(), 8.0);
    assert_eq!(x.grad(), 16.0);
    Ok(())
}

#[test]
fn diamond_through_distinct_branches() -> Result<(), ZenGradError> {
    // a feeds two branches which meet again: f = (a + b) * (a + c)
    let a = Value::new(1.0);
    let b = Value::new(3.0);
    let c = Value::new(5.0);
    let ab = &a + &b;
    let ac = &a + &c;
    let f = &ab * &ac;
    f.backward()?;
    // df/da = (a + c) + (a + b)
    assert_eq!(a.grad(), 10.0);
    assert_eq!(b.grad(), 6.0);
    assert_eq!(c.grad(), 4.0);
    Ok(())
}

#[test]
fn repeated_backward_doubles_leaf_gradients() -> Result<(), ZenGradError> {
    let x = Value::new(1.5);
    let y = (&x * 2.0).tanh() + x.exp();

    y.backward()?;
    let once = x.grad();
    let interior = y.operands()[0].grad();
    y.backward()?;
    check_value_near(x.grad(), 2.0 * once, 1e-12);
    // Interior nodes hold the latest pass only.
    assert_eq!(y.operands()[0].grad(), interior);

    // Forward values do not move.
    let t = f64::tanh(3.0) + f64::exp(1.5);
    assert_relative_eq!(y.data(), t, epsilon = 1e-12);
    Ok(())
}

#[test]
fn zeroing_between_passes_restores_single_pass_gradient() -> Result<(), ZenGradError> {
    let x = Value::new(0.3);
    let y = &x * &x * &x;
    y.backward()?;
    let once = x.grad();

    for node in y.topological_order()? {
        node.zero_grad();
    }
    y.backward()?;
    assert_relative_eq!(x.grad(), once, epsilon = 1e-15);
    assert_relative_eq!(once, 3.0 * 0.09, epsilon = 1e-12);
    Ok(())
}

#[test]
fn backward_does_not_touch_unreachable_nodes() -> Result<(), ZenGradError> {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let unrelated = Value::new(7.0);
    unrelated.set_grad(0.25);
    let used_elsewhere = &b * &unrelated;

    let c = &a + &b;
    c.backward()?;
    assert_eq!(unrelated.grad(), 0.25);
    assert_eq!(used_elsewhere.grad(), 0.0);
    Ok(())
}

#[test]
fn backward_overwrites_terminal_seed() -> Result<(), ZenGradError> {
    let a = Value::new(2.0);
    let b = a.exp();
    b.set_grad(42.0);
    b.backward()?;
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn backward_on_leaf_seeds_only_itself() -> Result<(), ZenGradError> {
    let a = Value::new(2.0);
    a.backward()?;
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn tanh_derivative_at_zero() -> Result<(), ZenGradError> {
    let x = Value::new(0.0);
    let y = x.tanh();
    assert_eq!(y.data(), 0.0);
    y.backward()?;
    assert_eq!(x.grad(), 1.0);
    Ok(())
}

fn assert_derivative<B, D>(input: f64, build: B, derivative: D) -> Result<(), ZenGradError>
where
    B: Fn(&Value) -> Value,
    D: Fn(f64) -> f64,
{
    let x = Value::new(input);
    let y = build(&x);
    y.backward()?;
    assert_relative_eq!(x.grad(), derivative(input), max_relative = 1e-9);
    Ok(())
}

#[test]
fn chain_rule_single_variable_compositions() -> Result<(), ZenGradError> {
    // exp(x^2): 2x exp(x^2)
    assert_derivative(0.7, |x| x.powi(2).exp(), |x| 2.0 * x * (x * x).exp())?;
    // tanh(3x + 1): 3 (1 - tanh^2)
    assert_derivative(
        -0.4,
        |x| (x * 3.0 + 1.0).tanh(),
        |x| 3.0 * (1.0 - (3.0 * x + 1.0).tanh().powi(2)),
    )?;
    // 1 / (1 + exp(-x)): s (1 - s)
    assert_derivative(
        1.2,
        |x| 1.0 / (1.0 + (-x).exp()),
        |x| {
            let s = 1.0 / (1.0 + (-x).exp());
            s * (1.0 - s)
        },
    )?;
    // (x - 2)^3 / 4: 3 (x - 2)^2 / 4
    assert_derivative(
        5.0,
        |x| (x - 2.0).powi(3) / 4.0,
        |x| 3.0 * (x - 2.0).powi(2) / 4.0,
    )?;
    Ok(())
}

#[test]
fn neuron_like_expression() -> Result<(), ZenGradError> {
    // o = tanh(x1*w1 + x2*w2 + b), the classic hand-checked neuron
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");
    let n = &x1 * &w1 + &x2 * &w2 + &b;
    let o = n.tanh();
    o.backward()?;

    assert_relative_eq!(o.data(), 0.7071, epsilon = 1e-4);
    check_grads_near(
        &[(&x1, -1.5), (&w1, 1.0), (&x2, 0.5), (&w2, 0.0), (&b, 0.5)],
        1e-6,
    );
    Ok(())
}

#[test]
fn tanh_via_exp_matches_builtin_tanh() -> Result<(), ZenGradError> {
    let x1 = Value::new(0.6);
    let o1 = x1.tanh();
    o1.backward()?;

    let x2 = Value::new(0.6);
    let e = (&x2 * 2.0).exp();
    let o2 = (&e - 1.0) / (&e + 1.0);
    o2.backward()?;

    assert_relative_eq!(o1.data(), o2.data(), epsilon = 1e-12);
    assert_relative_eq!(x1.grad(), x2.grad(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn long_chain_backward_and_drop() -> Result<(), ZenGradError> {
    let x = Value::new(1.0);
    let mut acc = x.clone();
    for _ in 0..200_000 {
        acc = &acc + 0.0;
    }
    acc.backward()?;
    assert_eq!(x.grad(), 1.0);
    drop(acc);
    // The leaf outlives the chain that consumed it.
    assert_eq!(x.data(), 1.0);
    Ok(())
}

#[test]
fn long_sum_drop() {
    let items: Vec<Value> = (0..200_000).map(|i| Value::new(i as f64)).collect();
    let total = zengrad_core::ops::sum_op(&Value::new(0.0), &items);
    assert_eq!(total.data(), 199_999.0 * 200_000.0 / 2.0);
    drop(total);
    assert_eq!(items[10].data(), 10.0);
}

#[test]
fn parameter_update_through_set_data() -> Result<(), ZenGradError> {
    let w = Value::new(3.0);
    let loss = w.powi(2);
    loss.backward()?;
    w.set_data(w.data() - 0.1 * w.grad());
    assert_relative_eq!(w.data(), 2.4, epsilon = 1e-12);
    // The old graph keeps its forward value.
    assert_eq!(loss.data(), 9.0);
    Ok(())
}
