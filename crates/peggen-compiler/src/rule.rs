//! Rule body emission.
//!
//! Each rule becomes one method whose body tries the alternatives in order:
//!
//! ```text
//! let mark = p.mark();
//! if <item 1> && <item 2> ... {
//!     return Some(<action>);
//! }
//! p.reset(mark);
//! ...
//! None
//! ```
//!
//! Loop helpers use `while` and collect each iteration's action instead.

use peggen_core::utils::fix_reserved;
use peggen_core::{Alt, Rule, RuleKind};

use crate::Result;
use crate::expr::{Expr, ExprCompiler, method_name};
use crate::memo::MemoStrategy;

/// Locals and functions a binding must not shadow.
const LOCAL_RESERVED: &[&str] = &["p", "mark", "cut", "children", "commit"];

const INDENT: &str = "    ";

/// Text of one rule routine while it is being compiled.
///
/// Declarations depend on what the alternatives contain, so they are
/// collected separately and put in front of the body at the end.
#[derive(Debug, Default)]
struct RuleContext {
    declarations: Vec<String>,
    body: Vec<String>,
    has_cut: bool,
    /// Locals bound by the current alternative, in order
    bindings: Vec<String>,
}

impl RuleContext {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.body
            .push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
    }
}

/// Emit the method for `rule`, indented for an `impl` block.
///
/// Helpers referenced by the rule are registered with the compiler's
/// registry and emitted separately.
pub fn emit_rule(compiler: &mut ExprCompiler<'_>, rule: &Rule) -> Result<String> {
    compiler.begin_rule(&rule.name);
    log::debug!("compiling rule {}", rule.name);

    let rhs = rule.flatten();
    if rhs.alts.is_empty() {
        return Err(compiler.malformed("rule has no alternatives"));
    }
    if rule.is_loop() && rhs.alts.len() != 1 {
        return Err(compiler.malformed("loop rule must have exactly one alternative"));
    }

    let ty = compiler.rule_type(rule);
    let mut ctx = RuleContext::default();
    for alt in &rhs.alts {
        emit_alt(compiler, rule, alt, &mut ctx)?;
    }

    if rule.is_loop() {
        ctx.declarations.push("let mut mark = p.mark();".to_string());
    } else {
        ctx.declarations.push("let mark = p.mark();".to_string());
    }
    if ctx.has_cut {
        ctx.declarations.push("let mut cut = false;".to_string());
    }
    if rule.is_loop() {
        ctx.declarations
            .push(format!("let mut children: {ty} = Vec::new();"));
    }
    let tail = match rule.kind {
        RuleKind::Loop0 => "Some(children)",
        RuleKind::Loop1 => "(!children.is_empty()).then_some(children)",
        _ => "None",
    };

    let visibility = if rule.kind == RuleKind::Named { "pub " } else { "" };
    let strategy = MemoStrategy::for_rule(rule);

    let comment = format!("{INDENT}// {}: {}", rule.name, rhs);
    let mut out = vec![comment.trim_end().to_string()];
    if rule.nullable {
        out.push(format!("{INDENT}// nullable"));
    }
    out.push(format!(
        "{INDENT}{visibility}fn {}(&mut self) -> Option<{ty}> {{",
        method_name(&rule.name)
    ));
    out.push(format!(
        "{INDENT}{INDENT}self.{}({:?}, |p| -> Option<{ty}> {{",
        strategy.wrapper(),
        rule.name
    ));
    let inner = INDENT.repeat(3);
    for line in ctx.declarations.iter().chain(&ctx.body) {
        out.push(format!("{inner}{line}"));
    }
    out.push(format!("{inner}{tail}"));
    out.push(format!("{INDENT}{INDENT}}})"));
    out.push(format!("{INDENT}}}"));
    Ok(out.join("\n"))
}

fn emit_alt(
    compiler: &mut ExprCompiler<'_>,
    rule: &Rule,
    alt: &Alt,
    ctx: &mut RuleContext,
) -> Result<()> {
    if rule.is_loop() && alt.items.is_empty() {
        return Err(compiler.malformed("loop alternative matches nothing"));
    }

    compiler.registry().begin_alt();
    ctx.bindings.clear();

    let mut conditions = Vec::with_capacity(alt.items.len());
    let mut alt_has_cut = false;
    for item in &alt.items {
        let compiled = compiler.compile(item)?;
        let binding = match (&compiled.expr, &compiled.binding) {
            (Expr::Cut, _) => {
                alt_has_cut = true;
                None
            }
            (_, Some(name)) => {
                let local = compiler
                    .registry()
                    .dedupe(&fix_reserved(name, LOCAL_RESERVED));
                ctx.bindings.push(local.clone());
                Some(local)
            }
            (_, None) => None,
        };
        conditions.push(compiled.expr.condition(binding.as_deref(), rule.is_gather()));
    }

    let action = match &alt.action {
        Some(action) => action.clone(),
        None => default_action(compiler, rule, &ctx.bindings)?,
    };

    // A set cut flag always ends the rule, so every alternative starts clear.
    ctx.has_cut |= alt_has_cut;
    let keyword = if rule.is_loop() { "while" } else { "if" };
    match conditions.as_slice() {
        [] => ctx.line(0, format!("{keyword} true {{")),
        [only] => ctx.line(0, format!("{keyword} {only} {{")),
        [first, rest @ ..] => {
            ctx.line(0, format!("{keyword} {first}"));
            for condition in rest {
                ctx.line(1, format!("&& {condition}"));
            }
            ctx.line(0, "{");
        }
    }
    if rule.is_loop() {
        ctx.line(1, format!("children.push({action});"));
        ctx.line(1, "mark = p.mark();");
    } else {
        ctx.line(1, format!("return Some({action});"));
    }
    ctx.line(0, "}");
    ctx.line(0, "p.reset(mark);");
    if alt_has_cut && !rule.is_loop() {
        ctx.line(0, "if cut {");
        ctx.line(1, "return None;");
        ctx.line(0, "}");
    }
    Ok(())
}

/// Result expression for an alternative without an action.
fn default_action(
    compiler: &ExprCompiler<'_>,
    rule: &Rule,
    bindings: &[String],
) -> Result<String> {
    if rule.is_gather() {
        return match bindings {
            [first, rest] => Ok(format!("std::iter::once({first}).chain({rest}).collect()")),
            _ => Err(compiler.malformed(format!(
                "gather alternative binds {} values instead of 2",
                bindings.len()
            ))),
        };
    }
    if rule.is_loop() {
        return match bindings {
            [only] => Ok(only.clone()),
            _ => Err(compiler.malformed(format!(
                "loop alternative binds {} values instead of 1",
                bindings.len()
            ))),
        };
    }
    Ok(match bindings {
        [] => "Value::None.into()".to_string(),
        [only] => format!("{only}.into()"),
        _ => {
            let items: Vec<String> = bindings.iter().map(|b| format!("Value::from({b})")).collect();
            format!("Value::Seq(vec![{}]).into()", items.join(", "))
        }
    })
}
