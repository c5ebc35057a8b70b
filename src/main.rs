use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::f64::consts::PI;
use symdiff::{Expr, derivative};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    println!("symdiff sample");

    {
        println!("======");
        let f = 3 * Expr::var();

        println!("f(x) = {}", f);
        println!("f(2) = {}", f.eval(2.0));
        println!("f(3) = {}", f.eval(3.0));
        println!("------");

        let df = derivative(&f);
        println!("f`(x) = {}", df);
        println!("f`(2) = {}", df.eval(2.0));
        println!("======\n");
    }

    {
        println!("======");
        let f = (0.5 + 0.5) / Expr::var();

        println!("f(x) = {}", f);
        println!("f(2) = {}", f.eval(2.0));
        println!("f(3) = {}", f.eval(3.0));
        println!("------");

        let df = derivative(&f);
        println!("f`(x) = {}", df);
        println!("f`(2) = {}", df.eval(2.0));
        println!("======\n");
    }

    {
        println!("======");
        let f = 2 * (Expr::var() + 1) / Expr::var();

        println!("f(x) = {}", f);
        println!("f(2) = {}", f.eval(2.0));
        println!("f(3) = {}", f.eval(3.0));
        println!("------");

        let df = derivative(&f);
        println!("f`(x) = {}", df);
        println!("f`(2) = {}", df.eval(2.0));
        println!("======\n");
    }

    {
        println!("======");
        let f = 4 * (2 * Expr::var()).sin();

        println!("f(x) = {}", f);
        println!("f(pi) = {}", f.eval(PI));
        println!("f(pi/4) = {}", f.eval(PI / 4.0));
        println!("------");

        let df = derivative(&f);
        println!("f`(x) = {}", df);
        println!("f`(pi) = {}", df.eval(PI));
        println!("f`(pi/4) = {}", df.eval(PI / 4.0));
        println!("------");

        let (norm, ok) = f.check_derivative(0.0, PI, 100, 1e-4);
        println!("numerical cross-check: norm = {:e}, ok = {}", norm, ok);
        println!("======\n");
    }
}
