mod args;

use anyhow::Context;
use args::Args;
use clap::Parser;
use minic::*;

#[cfg(feature = "lexer")]
fn tokenize(source: &str, args: &Args) -> anyhow::Result<lexer::Tokens> {
    let tokens = lexer::lex(source)?;
    if args.tokens {
        println!("[tokens]");
        for token in &tokens {
            println!("{token:?}");
        }
    }
    Ok(tokens)
}

#[cfg(feature = "parser")]
fn parse(tokens: &[lexer::Token], args: &Args) -> anyhow::Result<Vec<ast::Statement>> {
    let parsed = parser::parse(tokens)?;
    if args.ast {
        println!("[ast]");
        for statement in &parsed {
            println!("{statement:?}");
        }
    }
    Ok(parsed)
}

#[cfg(feature = "semantic_analysis")]
fn validate(ast: &[ast::Statement]) -> anyhow::Result<()> {
    // The warnings themselves go through the log channel.
    let warnings = semantic_analysis::analyze(ast)?;
    println!("semantic analysis passed with {} warnings", warnings.len());
    Ok(())
}

#[cfg(feature = "quads")]
fn lower(ast: &[ast::Statement], args: &Args) -> anyhow::Result<quads::Quads> {
    let quads = quads::lower(ast)?;
    if args.quads {
        println!("[quads]");
        for quad in &quads {
            println!("{quad:?}");
        }
    }
    Ok(quads)
}

#[allow(unused_variables)]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("can't read {}", args.input.display()))?;

    #[cfg(feature = "lexer")]
    let tokens = tokenize(&source, &args)?;

    #[cfg(feature = "parser")]
    let ast = parse(&tokens, &args)?;

    #[cfg(feature = "semantic_analysis")]
    validate(&ast)?;

    #[cfg(feature = "quads")]
    let quads = lower(&ast, &args)?;

    #[cfg(feature = "codegen")]
    let instructions = codegen::emit(&quads);

    #[cfg(feature = "emission")]
    {
        println!("[object code]");
        for instruction in &instructions {
            println!("{instruction}");
        }
    }

    Ok(())
}
