//! alifc-drv - Compiler driver.
//!
//! Orchestrates the four-stage pipeline:
//!
//! ```text
//! Source (.alif)
//!     │
//!     ▼
//! [Lexer] ──▶ token stream
//!     │
//!     ▼
//! [Parser] ──▶ AST
//!     │
//!     ▼
//! [Semantic analysis] ──▶ validated AST
//!     │
//!     ▼
//! [Code generation] ──▶ assembly listing (.s)
//! ```
//!
//! Stages run strictly in sequence and each aborts the pipeline on its
//! first error. The driver reads one source file, writes one assembly
//! listing, and reports progress on stdout; diagnostics go to stderr
//! via the binary.

use std::fs;
use std::path::{Path, PathBuf};

use alifc_gen::{CodeGenError, CodeGenerator};
use alifc_lex::LexError;
use alifc_par::ParseError;
use alifc_sem::SemanticError;
use thiserror::Error;
use tracing::debug;

/// Compiler configuration for one invocation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input source file.
    pub input: PathBuf,

    /// Output path; `None` means the input path with a `.s` extension.
    pub output: Option<PathBuf>,

    /// Print the token stream after lexing.
    pub dump_tokens: bool,

    /// Print the AST after parsing.
    pub dump_ast: bool,
}

impl Config {
    /// Creates a configuration with default options for an input path.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            dump_tokens: false,
            dump_ast: false,
        }
    }

    /// Resolves the output path.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.input.with_extension("s"),
        }
    }
}

/// Any failure the pipeline can produce, prefixed with its category.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Error: failed to read '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error: failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),

    #[error("Codegen error: {0}")]
    CodeGen(#[from] CodeGenError),
}

/// Compiles a source string to an assembly listing.
///
/// This is the pure pipeline with no file I/O or progress output.
///
/// # Examples
///
/// ```
/// let asm = alifc_drv::compile_source("دالة رئيسية() { ارجع 0; }").unwrap();
/// assert!(asm.starts_with(".intel_syntax noprefix"));
/// ```
pub fn compile_source(source: &str) -> Result<String, CompileError> {
    let tokens = alifc_lex::tokenize(source)?;
    debug!(tokens = tokens.len(), "lexing finished");

    let program = alifc_par::parse(tokens)?;
    debug!(functions = program.functions.len(), "parsing finished");

    alifc_sem::analyze(&program)?;

    let assembly = CodeGenerator::new().generate(&program)?;
    debug!(bytes = assembly.len(), "code generation finished");

    Ok(assembly)
}

/// Runs a full compilation: read the input, drive the pipeline with
/// progress output, write the listing.
pub fn run(config: &Config) -> Result<(), CompileError> {
    let source = fs::read_to_string(&config.input).map_err(|source| CompileError::ReadInput {
        path: config.input.clone(),
        source,
    })?;

    println!("[1/4] Lexical analysis...");
    let tokens = alifc_lex::tokenize(&source)?;
    debug!(tokens = tokens.len(), "lexing finished");
    if config.dump_tokens {
        for token in &tokens {
            println!("{:?}", token);
        }
    }

    println!("[2/4] Parsing...");
    let program = alifc_par::parse(tokens)?;
    debug!(functions = program.functions.len(), "parsing finished");
    if config.dump_ast {
        println!("{:#?}", program);
    }

    println!("[3/4] Semantic analysis...");
    alifc_sem::analyze(&program)?;

    println!("[4/4] Code generation...");
    let assembly = CodeGenerator::new().generate(&program)?;

    let output = config.output_path();
    fs::write(&output, &assembly).map_err(|source| CompileError::WriteOutput {
        path: output.clone(),
        source,
    })?;

    print_summary(&output);
    Ok(())
}

/// Prints the success summary with assemble-and-link hints.
fn print_summary(output: &Path) {
    let object = output.with_extension("o");
    let binary = output.with_extension("");

    println!("Compilation successful!");
    println!("  Output: {}", output.display());
    println!();
    println!("To assemble and link:");
    println!("  as {} -o {}", output.display(), object.display());
    println!("  ld {} -o {}", object.display(), binary.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_minimal_program() {
        let asm = compile_source("دالة رئيسية() { ارجع 42; }").unwrap();
        assert!(asm.starts_with(".intel_syntax noprefix"));
        assert!(asm.contains("رئيسية:"));
        assert!(asm.contains("_start:"));
        assert!(asm.contains("print_number:"));
    }

    #[test]
    fn test_print_arithmetic_scenario() {
        // اطبع(2 + 3 * 4): multiplication binds tighter, so 3 * 4 is
        // computed before the addition.
        let asm = compile_source("دالة رئيسية() { اطبع(2 + 3 * 4); ارجع 0; }").unwrap();
        assert!(asm.contains("imul rax, rbx"));
        assert!(asm.contains("add rax, rbx"));
        assert!(asm.find("imul rax, rbx").unwrap() < asm.find("add rax, rbx").unwrap());
        assert!(asm.contains("call print_number"));
    }

    #[test]
    fn test_variable_and_assignment_scenario() {
        let asm = compile_source(
            "دالة رئيسية() { متغير س = 10; س = س - 3; اطبع(س); ارجع 0; }",
        )
        .unwrap();
        assert!(asm.contains("mov [rbp-8], rax"));
        assert!(asm.contains("sub rax, rbx"));
    }

    #[test]
    fn test_branching_scenario() {
        let asm = compile_source(
            "دالة رئيسية() { متغير س = 5; اذا (س > 3) { اطبع(1); } والا { اطبع(0); } ارجع 0; }",
        )
        .unwrap();
        assert!(asm.contains("setg al"));
        assert!(asm.contains("je else"));
        assert!(asm.contains("jmp endif"));
    }

    #[test]
    fn test_loop_scenario() {
        let asm = compile_source(
            "دالة رئيسية() { متغير مج = 0; متغير ع = 1; بينما (ع <= 5) { مج = مج + ع; ع = ع + 1; } اطبع(مج); ارجع 0; }",
        )
        .unwrap();
        assert!(asm.contains("while_start"));
        assert!(asm.contains("while_end"));
        assert!(asm.contains("setle al"));
    }

    #[test]
    fn test_user_function_scenario() {
        let asm = compile_source(
            "دالة جمع(ا, ب) { ارجع ا + ب; } دالة رئيسية() { اطبع(جمع(7, 8)); ارجع 0; }",
        )
        .unwrap();
        assert!(asm.contains("جمع:"));
        assert!(asm.contains("call جمع"));
    }

    #[test]
    fn test_lex_error_category() {
        let err = compile_source("دالة رئيسية() { ارجع @؛ }").unwrap_err();
        assert!(matches!(err, CompileError::Lex(_)));
        assert!(err.to_string().starts_with("Lex error:"));
    }

    #[test]
    fn test_parse_error_category() {
        let err = compile_source("دالة رئيسية() { ارجع 1 }").unwrap_err();
        assert!(matches!(err, CompileError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_semantic_error_category() {
        let err = compile_source("دالة رئيسية() { اطبع(ص); ارجع 0; }").unwrap_err();
        assert!(matches!(err, CompileError::Semantic(_)));
        assert_eq!(
            err.to_string(),
            "Semantic error: Variable 'ص' not defined"
        );
    }

    #[test]
    fn test_stage_order_lex_before_parse() {
        // Both a lex error (lone !) and a parse error (missing brace)
        // are present; the lex error wins because stages run in order.
        let err = compile_source("دالة رئيسية( { !").unwrap_err();
        assert!(matches!(err, CompileError::Lex(_)));
    }

    #[test]
    fn test_output_path_defaults_to_s_extension() {
        let config = Config::new("برنامج.alif");
        assert_eq!(config.output_path(), PathBuf::from("برنامج.s"));
    }

    #[test]
    fn test_output_path_override() {
        let mut config = Config::new("a.alif");
        config.output = Some(PathBuf::from("out/prog.s"));
        assert_eq!(config.output_path(), PathBuf::from("out/prog.s"));
    }
}
