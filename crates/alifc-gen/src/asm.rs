//! Assembly emitter.

use alifc_par::{BinOp, Block, Call, Expr, Function, Program, Stmt, UnOp};
use rustc_hash::FxHashMap;

use crate::abi::{syscall, SystemVAbi};
use crate::error::{CodeGenError, Result};

/// Name of the user entry function called by the `_start` trampoline.
pub const ENTRY_FUNCTION: &str = "رئيسية";

/// Bytes reserved for locals in every function frame. Fixed regardless
/// of how many locals the function declares; a function with more than
/// 32 slots overruns it.
const FRAME_SIZE: u32 = 256;

/// Assembly code generator.
///
/// Holds per-compilation emission state. The label counter is monotone
/// across the whole compilation so every emitted label is unique; the
/// local-variable map and stack offset reset at each function.
pub struct CodeGenerator {
    /// Emitted lines, joined with newlines at the end.
    output: Vec<String>,

    /// Monotone label counter.
    label_counter: u32,

    /// Current function's variable → stack offset map. Offsets are
    /// negative displacements from `rbp`.
    locals: FxHashMap<String, i32>,

    /// Running offset of the most recently allocated local slot.
    stack_offset: i32,
}

impl CodeGenerator {
    /// Creates a fresh generator.
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            label_counter: 0,
            locals: FxHashMap::default(),
            stack_offset: 0,
        }
    }

    /// Generates the complete assembly listing for a program.
    ///
    /// Layout order: syntax directive, data section, text section with
    /// one body per user function in source order, the `_start`
    /// trampoline, and finally the `print_number` helper.
    pub fn generate(&mut self, program: &Program) -> Result<String> {
        self.emit(".intel_syntax noprefix");
        self.emit("");

        // Format string kept for ABI compatibility; print_number does
        // not reference it.
        self.emit(".section .data");
        self.emit("fmt_int: .asciz \"%d\\n\"");

        self.emit(".section .text");
        self.emit(".global _start");

        for function in &program.functions {
            self.generate_function(function)?;
        }

        self.generate_start();
        self.emit("");
        self.emit(PRINT_NUMBER_HELPER);
        self.emit("");

        Ok(self.output.join("\n"))
    }

    /// Emits the `_start` trampoline: call the entry function, move its
    /// return value into the exit status register, exit.
    fn generate_start(&mut self) {
        self.emit("");
        self.emit("_start:");
        self.emit(&format!("    call {}", ENTRY_FUNCTION));
        self.emit("    mov rdi, rax");
        self.emit(&format!("    mov rax, {}", syscall::EXIT));
        self.emit("    syscall");
    }

    /// Generates one function: label, prologue, parameter spill, body,
    /// implicit epilogue.
    fn generate_function(&mut self, function: &Function) -> Result<()> {
        self.locals.clear();
        self.stack_offset = 0;

        self.emit("");
        self.emit(&format!("{}:", function.name));
        self.emit("    push rbp");
        self.emit("    mov rbp, rsp");
        self.emit(&format!("    sub rsp, {}", FRAME_SIZE));

        // Spill register arguments into local slots in declaration
        // order. Parameters past the sixth get no slot.
        for (i, param) in function.params.iter().enumerate() {
            if let Some(reg) = SystemVAbi::arg_register(i) {
                let offset = self.allocate_local(param);
                self.emit(&format!("    mov [rbp{}], {}", offset, reg));
            }
        }

        self.generate_block(&function.body)?;

        // Implicit epilogue so fall-through off the body is safe; the
        // return value is whatever rax holds.
        self.emit("    mov rsp, rbp");
        self.emit("    pop rbp");
        self.emit("    ret");

        Ok(())
    }

    fn generate_block(&mut self, block: &Block) -> Result<()> {
        for stmt in &block.statements {
            self.generate_statement(stmt)?;
        }
        Ok(())
    }

    fn generate_statement(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl { name, value } => {
                let offset = self.allocate_local(name);
                self.generate_expression(value)?;
                self.emit(&format!("    mov [rbp{}], rax", offset));
                Ok(())
            }

            Stmt::Assign { name, value } => {
                self.generate_expression(value)?;
                let location = self.var_location(name)?;
                self.emit(&format!("    mov {}, rax", location));
                Ok(())
            }

            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                let else_label = self.new_label("else");
                let end_label = self.new_label("endif");

                self.generate_expression(condition)?;
                self.emit("    cmp rax, 0");
                self.emit(&format!("    je {}", else_label));

                self.generate_block(then_block)?;
                self.emit(&format!("    jmp {}", end_label));

                self.emit(&format!("{}:", else_label));
                if let Some(else_block) = else_block {
                    self.generate_block(else_block)?;
                }

                self.emit(&format!("{}:", end_label));
                Ok(())
            }

            Stmt::While { condition, body } => {
                let start_label = self.new_label("while_start");
                let end_label = self.new_label("while_end");

                self.emit(&format!("{}:", start_label));
                self.generate_expression(condition)?;
                self.emit("    cmp rax, 0");
                self.emit(&format!("    je {}", end_label));

                self.generate_block(body)?;
                self.emit(&format!("    jmp {}", start_label));

                self.emit(&format!("{}:", end_label));
                Ok(())
            }

            Stmt::Return { value } => {
                self.generate_expression(value)?;
                self.emit("    mov rsp, rbp");
                self.emit("    pop rbp");
                self.emit("    ret");
                Ok(())
            }

            Stmt::Print { value } => {
                self.generate_expression(value)?;
                self.emit("    mov rdi, rax");
                self.emit("    call print_number");
                Ok(())
            }

            Stmt::Call(call) => self.generate_call(call),
        }
    }

    /// Generates an expression; the result is left in `rax`.
    fn generate_expression(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Number(value) => {
                self.emit(&format!("    mov rax, {}", value));
                Ok(())
            }

            Expr::Ident(name) => {
                let location = self.var_location(name)?;
                self.emit(&format!("    mov rax, {}", location));
                Ok(())
            }

            Expr::Binary { op, left, right } => {
                // Right operand first, parked on the stack; then the
                // left operand lands in rax and the right is popped
                // into rbx.
                self.generate_expression(right)?;
                self.emit("    push rax");
                self.generate_expression(left)?;
                self.emit("    pop rbx");
                self.generate_binary_op(*op);
                Ok(())
            }

            Expr::Unary { op, operand } => {
                self.generate_expression(operand)?;
                match op {
                    UnOp::Neg => self.emit("    neg rax"),
                }
                Ok(())
            }

            Expr::Call(call) => self.generate_call(call),
        }
    }

    /// Emits the operator lowering for a binary op with the left value
    /// in `rax` and the right in `rbx`.
    fn generate_binary_op(&mut self, op: BinOp) {
        match op {
            BinOp::Add => self.emit("    add rax, rbx"),
            BinOp::Sub => self.emit("    sub rax, rbx"),
            BinOp::Mul => self.emit("    imul rax, rbx"),
            BinOp::Div => {
                // Signed division; quotient in rax, remainder
                // discarded.
                self.emit("    cqo");
                self.emit("    idiv rbx");
            }
            BinOp::Eq => self.emit_comparison("sete"),
            BinOp::Ne => self.emit_comparison("setne"),
            BinOp::Gt => self.emit_comparison("setg"),
            BinOp::Lt => self.emit_comparison("setl"),
            BinOp::Ge => self.emit_comparison("setge"),
            BinOp::Le => self.emit_comparison("setle"),
        }
    }

    /// Comparison lowering: flags, set-byte, zero-extend to 64 bits.
    fn emit_comparison(&mut self, set_instr: &str) {
        self.emit("    cmp rax, rbx");
        self.emit(&format!("    {} al", set_instr));
        self.emit("    movzx rax, al");
    }

    /// Generates a function call; the return value is left in `rax`.
    ///
    /// Arguments are evaluated right to left and pushed; the pops then
    /// receive the first arguments first, filling the argument
    /// registers in ABI order.
    fn generate_call(&mut self, call: &Call) -> Result<()> {
        for arg in call.args.iter().rev() {
            self.generate_expression(arg)?;
            self.emit("    push rax");
        }

        for i in 0..call.args.len() {
            if let Some(reg) = SystemVAbi::arg_register(i) {
                self.emit(&format!("    pop {}", reg));
            }
        }

        self.emit(&format!("    call {}", call.name));
        Ok(())
    }

    /// Allocates a stack slot for a local and records its offset.
    fn allocate_local(&mut self, name: &str) -> i32 {
        self.stack_offset -= 8;
        self.locals.insert(name.to_string(), self.stack_offset);
        self.stack_offset
    }

    /// Returns the memory operand for a variable's slot.
    fn var_location(&self, name: &str) -> Result<String> {
        match self.locals.get(name) {
            Some(offset) => Ok(format!("[rbp{}]", offset)),
            None => Err(CodeGenError::UnresolvedLocal(name.to_string())),
        }
    }

    /// Produces a unique label with the given prefix.
    fn new_label(&mut self, prefix: &str) -> String {
        let label = format!("{}{}", prefix, self.label_counter);
        self.label_counter += 1;
        label
    }

    fn emit(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer-print helper, emitted once at the end of every listing.
///
/// Converts the signed value in `rdi` to decimal in a stack buffer:
/// a newline sentinel goes in first, a negative value prints its minus
/// sign immediately and is negated, then digits are laid down in
/// reverse by repeated division by ten. The buffer is then walked
/// backward, one write syscall per byte, ending after the sentinel so
/// the output is the digits followed by a newline.
const PRINT_NUMBER_HELPER: &str = "print_number:
    push rbp
    mov rbp, rsp
    sub rsp, 32

    mov rax, rdi
    lea rsi, [rbp-32]
    mov BYTE PTR [rsi], 10
    inc rsi

    test rax, rax
    jns .convert_digits
    neg rax
    push rax
    mov BYTE PTR [rsi], 45
    mov rax, 1
    mov rdi, 1
    mov rdx, 1
    syscall
    pop rax

.convert_digits:
    mov rcx, 10
    test rax, rax
    jnz .digit_loop
    mov BYTE PTR [rsi], 48
    inc rsi
    jmp .print_loop

.digit_loop:
    test rax, rax
    jz .print_loop
    xor rdx, rdx
    div rcx
    add dl, 48
    mov BYTE PTR [rsi], dl
    inc rsi
    jmp .digit_loop

.print_loop:
    dec rsi
    mov rax, 1
    mov rdi, 1
    mov rdx, 1
    syscall
    cmp BYTE PTR [rsi], 10
    jne .print_loop

    mov rsp, rbp
    pop rbp
    ret";
