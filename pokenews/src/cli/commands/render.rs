//! `render`: compile markup and print it.

use pokenews_core::markup::compile;

use crate::cli::args::RenderArgs;

/// Compiles `args.markup` and prints it in the chosen encoding.
pub fn run(args: &RenderArgs) {
    let text = compile(&args.markup);
    println!("{}", args.render.render(&text));
}
