use log::info;
use clap::{Parser, Subcommand};

use super::cmd::binop::{self, Op};
use super::utils::*;

/// Arithmetic on sparse polynomials with rational coefficients.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="kebab-case")]
pub enum Cmd {
    /// p + q
    Add(binop::Args),
    /// p - q
    Sub(binop::Args),
    /// p * q
    Mul(binop::Args),
    /// quotient and remainder of p / q
    DivRem(binop::Args),
    /// p / q, failing unless q divides p
    Div(binop::Args),
}

impl Cmd {
    fn split(&self) -> (Op, &binop::Args) {
        match self {
            Cmd::Add(args)    => (Op::Add, args),
            Cmd::Sub(args)    => (Op::Sub, args),
            Cmd::Mul(args)    => (Op::Mul, args),
            Cmd::DivRem(args) => (Op::DivRem, args),
            Cmd::Div(args)    => (Op::Div, args),
        }
    }
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        let (_, args) = self.command.split();
        spoly::util::log::level_for_verbosity(args.log)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = spoly::util::log::init_simple_logger(l) {
            eprintln!("failed to init logger: {e}");
        }
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> {
        let (op, args) = self.args.command.split();
        guard_panic(||
            binop::dispatch(op, args)
        )
    }
}
