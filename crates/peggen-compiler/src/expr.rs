//! Expression compiler: one grammar item to one parsing call.
//!
//! The result is structural ([`Compiled`]) rather than text, so wrapping an
//! already optional call in `Opt` is a no-op instead of a string edit.

use peggen_core::utils::fix_reserved;
use peggen_core::{Grammar, Item, NamedItem, Rule, RuleKind};

use crate::config::TokenTable;
use crate::naming::Registry;
use crate::{Error, Result};

/// Token classes with a dedicated runtime primitive.
pub(crate) const LEXICAL_CLASSES: &[&str] = &["NAME", "NUMBER", "STRING", "OP"];

/// `PegParser` and constructor methods a rule method must not shadow.
const RUNTIME_METHODS: &[&str] = &[
    "expect",
    "expect_kind",
    "logged",
    "mark",
    "memoize",
    "memoize_left_rec",
    "name",
    "negative_lookahead",
    "new",
    "number",
    "op",
    "peek",
    "positive_lookahead",
    "reset",
    "state",
    "state_mut",
    "string",
];

pub(crate) const TOKEN_TYPE: &str = "Token";
pub(crate) const VALUE_TYPE: &str = "Value";

/// Method name for a rule.
pub(crate) fn method_name(rule: &str) -> String {
    fix_reserved(rule, RUNTIME_METHODS)
}

/// How a call's absence affects the enclosing alternative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// `None` fails the alternative.
    Required,
    /// Always returns `Some` (zero-or-more loops).
    Infallible,
    /// `None` is tolerated and bound as an absent value.
    Optional,
}

/// A call to a rule routine or runtime primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub target: String,
    pub args: Vec<String>,
    pub presence: Presence,
}

impl Call {
    fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            args: Vec::new(),
            presence: Presence::Required,
        }
    }

    fn with_arg(mut self, arg: String) -> Self {
        self.args.push(arg);
        self
    }

    fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    pub fn render(&self) -> String {
        format!("p.{}({})", self.target, self.args.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Call(Call),
    /// Zero-width assertion over `inner`.
    Lookahead { positive: bool, inner: Box<Expr> },
    Cut,
}

impl Expr {
    /// Operand of an alternative's `if` / `while` condition chain.
    ///
    /// With `reject_absent`, an optional call that returns `None` fails the
    /// chain; gather rules need this.
    pub fn condition(&self, binding: Option<&str>, reject_absent: bool) -> String {
        match self {
            Expr::Call(call) => {
                let rendered = call.render();
                match (call.presence, binding) {
                    (Presence::Optional, Some(b)) if reject_absent => {
                        format!("let {b} @ Some(_) = {rendered}")
                    }
                    (Presence::Optional, Some(b)) => format!("let {b} = {rendered}"),
                    (Presence::Optional, None) if !reject_absent => {
                        format!("({rendered}.is_some() || true)")
                    }
                    (_, Some(b)) => format!("let Some({b}) = {rendered}"),
                    (_, None) => format!("{rendered}.is_some()"),
                }
            }
            Expr::Lookahead { positive, inner } => {
                let method = if *positive {
                    "positive_lookahead"
                } else {
                    "negative_lookahead"
                };
                let test = format!("p.{}({})", method, inner.lookahead_target());
                match binding {
                    Some(b) => format!("let {b} @ true = {test}"),
                    None => test,
                }
            }
            Expr::Cut => "commit(&mut cut)".to_string(),
        }
    }

    /// Function argument for a lookahead primitive.
    fn lookahead_target(&self) -> String {
        match self {
            Expr::Call(call) if call.presence == Presence::Optional => {
                format!("|p| Some({})", call.render())
            }
            Expr::Call(call) if call.args.is_empty() => format!("Self::{}", call.target),
            Expr::Call(call) => format!("|p| {}", call.render()),
            Expr::Lookahead { .. } => format!("|p| {}.then_some(())", self.condition(None, false)),
            Expr::Cut => unreachable!("lookahead over a cut is rejected during compilation"),
        }
    }
}

/// A compiled item: what to call, what to bind it to, and its result type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub binding: Option<String>,
    pub expr: Expr,
    pub ty: String,
}

impl Compiled {
    fn call(binding: impl Into<String>, call: Call, ty: impl Into<String>) -> Self {
        Self {
            binding: Some(binding.into()),
            expr: Expr::Call(call),
            ty: ty.into(),
        }
    }
}

/// Compiles grammar items, registering helper rules as needed.
pub struct ExprCompiler<'g> {
    grammar: &'g Grammar,
    tokens: &'g TokenTable,
    registry: Registry,
    /// Rule currently being compiled, for diagnostics
    rule: String,
}

impl<'g> ExprCompiler<'g> {
    pub fn new(grammar: &'g Grammar, tokens: &'g TokenTable) -> Self {
        Self {
            grammar,
            tokens,
            registry: Registry::new(grammar.rules.keys().map(String::as_str)),
            rule: String::new(),
        }
    }

    pub fn registry(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn begin_rule(&mut self, name: &str) {
        self.rule = name.to_string();
    }

    /// Result type of a rule routine.
    pub fn rule_type(&self, rule: &Rule) -> String {
        rule.ty.clone().unwrap_or_else(|| VALUE_TYPE.to_string())
    }

    pub(crate) fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::MalformedItem {
            rule: self.rule.clone(),
            reason: reason.into(),
        }
    }

    /// Compile an item, honoring its explicit binding name.
    pub fn compile(&mut self, named: &NamedItem) -> Result<Compiled> {
        let mut compiled = self.compile_item(&named.item)?;
        if let Some(name) = &named.name
            && compiled.expr != Expr::Cut
        {
            compiled.binding = Some(name.clone());
        }
        Ok(compiled)
    }

    fn compile_item(&mut self, item: &Item) -> Result<Compiled> {
        match item {
            Item::Name(name) => self.compile_name(name),
            Item::Literal(text) => Ok(Compiled::call(
                "literal",
                Call::new("expect").with_arg(format!("{text:?}")),
                TOKEN_TYPE,
            )),
            Item::Opt(inner) => {
                let compiled = self.compile_item(inner)?;
                let Expr::Call(mut call) = compiled.expr else {
                    return Err(self.malformed(format!("`{item}` makes a zero-width item optional")));
                };
                let ty = if call.presence == Presence::Required {
                    call.presence = Presence::Optional;
                    format!("Option<{}>", compiled.ty)
                } else {
                    compiled.ty
                };
                Ok(Compiled::call("opt", call, ty))
            }
            Item::Repeat0(node) | Item::Repeat1(node) => {
                let repeat1 = matches!(item, Item::Repeat1(_));
                let elem_ty = self.element_type(item, node)?;
                let name = self.registry.name_loop(node, repeat1, &elem_ty);
                let presence = if repeat1 {
                    Presence::Required
                } else {
                    Presence::Infallible
                };
                let call = Call::new(&name).with_presence(presence);
                Ok(Compiled::call(name, call, format!("Vec<{elem_ty}>")))
            }
            Item::Gather { separator, node } => {
                let elem_ty = self.element_type(item, node)?;
                let name = self.registry.name_gather(separator, node, &elem_ty);
                Ok(Compiled::call(&name, Call::new(&name), format!("Vec<{elem_ty}>")))
            }
            Item::Group(rhs) => {
                if let Some(only) = rhs.single_item() {
                    return self.compile(only);
                }
                let name = self.registry.name_group(rhs);
                Ok(Compiled::call(&name, Call::new(&name), VALUE_TYPE))
            }
            Item::PositiveLookahead(inner) | Item::NegativeLookahead(inner) => {
                let compiled = self.compile_item(inner)?;
                if compiled.expr == Expr::Cut {
                    return Err(self.malformed(format!("`{item}` looks ahead over a cut")));
                }
                Ok(Compiled {
                    binding: None,
                    expr: Expr::Lookahead {
                        positive: matches!(item, Item::PositiveLookahead(_)),
                        inner: Box::new(compiled.expr),
                    },
                    ty: "bool".to_string(),
                })
            }
            Item::Cut => Ok(Compiled {
                binding: Some("cut".to_string()),
                expr: Expr::Cut,
                ty: "bool".to_string(),
            }),
        }
    }

    fn compile_name(&self, name: &str) -> Result<Compiled> {
        if LEXICAL_CLASSES.contains(&name) {
            let lower = name.to_lowercase();
            return Ok(Compiled::call(&lower, Call::new(&lower), TOKEN_TYPE));
        }
        if self.tokens.contains_name(name) {
            let call = Call::new("expect").with_arg(format!("{name:?}"));
            return Ok(Compiled::call(name.to_lowercase(), call, TOKEN_TYPE));
        }
        if let Some(rule) = self.grammar.rule(name) {
            return Ok(Compiled::call(
                name,
                Call::new(method_name(name)),
                self.rule_type(rule),
            ));
        }
        if let Some((ty, kind)) = self.registry.signature(name) {
            let presence = if kind == RuleKind::Loop0 {
                Presence::Infallible
            } else {
                Presence::Required
            };
            let call = Call::new(name).with_presence(presence);
            return Ok(Compiled::call(name, call, ty));
        }
        Err(Error::DanglingReference {
            rule: self.rule.clone(),
            name: name.to_string(),
        })
    }

    /// Element type of a repetition, which must consume input to succeed.
    fn element_type(&self, item: &Item, node: &Item) -> Result<String> {
        match self.presence_of(node) {
            Some(Presence::Required) if !self.is_nullable(node) => self.type_of(node),
            _ => Err(self.malformed(format!(
                "`{item}` repeats an item that can succeed without consuming input"
            ))),
        }
    }

    /// Whether `item` refers to a rule the front-end marked nullable.
    fn is_nullable(&self, item: &Item) -> bool {
        match item {
            Item::Name(name) => self.grammar.rule(name).is_some_and(|r| r.nullable),
            Item::Group(rhs) => rhs
                .single_item()
                .is_some_and(|only| self.is_nullable(&only.item)),
            _ => false,
        }
    }

    /// Presence of an item's call without compiling it. `None` for zero-width items.
    fn presence_of(&self, item: &Item) -> Option<Presence> {
        match item {
            Item::Name(name) => match self.registry.signature(name) {
                Some((_, RuleKind::Loop0)) => Some(Presence::Infallible),
                _ => Some(Presence::Required),
            },
            Item::Literal(_) | Item::Repeat1(_) | Item::Gather { .. } => Some(Presence::Required),
            Item::Opt(inner) => match self.presence_of(inner) {
                Some(Presence::Required) => Some(Presence::Optional),
                other => other,
            },
            Item::Repeat0(_) => Some(Presence::Infallible),
            Item::Group(rhs) => match rhs.single_item() {
                Some(only) => self.presence_of(&only.item),
                None => Some(Presence::Required),
            },
            Item::PositiveLookahead(_) | Item::NegativeLookahead(_) | Item::Cut => None,
        }
    }

    /// Result type of an item without compiling it.
    fn type_of(&self, item: &Item) -> Result<String> {
        match item {
            Item::Name(name) => self.compile_name(name).map(|c| c.ty),
            Item::Literal(_) => Ok(TOKEN_TYPE.to_string()),
            Item::Opt(inner) => {
                let ty = self.type_of(inner)?;
                if self.presence_of(inner) == Some(Presence::Required) {
                    Ok(format!("Option<{ty}>"))
                } else {
                    Ok(ty)
                }
            }
            Item::Repeat0(node) | Item::Repeat1(node) | Item::Gather { node, .. } => {
                Ok(format!("Vec<{}>", self.type_of(node)?))
            }
            Item::Group(rhs) => match rhs.single_item() {
                Some(only) => self.type_of(&only.item),
                None => Ok(VALUE_TYPE.to_string()),
            },
            Item::PositiveLookahead(_) | Item::NegativeLookahead(_) | Item::Cut => {
                Ok("bool".to_string())
            }
        }
    }
}
