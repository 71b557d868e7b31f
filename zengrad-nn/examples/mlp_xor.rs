//! Trains a 2-4-4-1 tanh network on XOR with plain gradient descent.
//!
//! Run with `RUST_LOG=info cargo run -p zengrad-nn --example mlp_xor`.
//! Pass `--dot` to print the final loss graph in Graphviz format.

use rand::rngs::StdRng;
use rand::SeedableRng;
use zengrad_core::autograd::{to_dot, RankDir};
use zengrad_core::{Value, ZenGradError};
use zengrad_nn::{squared_error_loss, Mlp, Module, Optimizer, Sgd};

const XS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const YS: [f64; 4] = [-1.0, 1.0, 1.0, -1.0];
const STEPS: usize = 500;

fn predict(mlp: &Mlp) -> Result<Vec<Value>, ZenGradError> {
    XS.iter()
        .map(|x| {
            let inputs: Vec<Value> = x.iter().copied().map(Value::new).collect();
            mlp.forward_scalar(&inputs)
        })
        .collect()
}

fn main() -> Result<(), ZenGradError> {
    env_logger::init();
    let print_dot = std::env::args().any(|arg| arg == "--dot");

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(2, &[4, 4, 1], &mut rng);
    let mut optimizer = Sgd::new(mlp.parameters(), 0.05)?;
    log::info!("training MLP with {} parameters", mlp.num_parameters());

    let mut loss = squared_error_loss(&predict(&mlp)?, &YS)?;
    for step in 0..STEPS {
        loss = squared_error_loss(&predict(&mlp)?, &YS)?;
        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;
        if step % 50 == 0 {
            log::info!("step {:>4}: loss = {:.6}", step, loss.data());
        }
    }

    for (x, pred) in XS.iter().zip(predict(&mlp)?) {
        println!("{:?} -> {:+.4}", x, pred.data());
    }
    println!("final loss: {:.6}", loss.data());

    if print_dot {
        println!("{}", to_dot(&loss, RankDir::LeftRight)?);
    }
    Ok(())
}
