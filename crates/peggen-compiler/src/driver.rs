//! Work-list driver and module assembly.

use std::collections::VecDeque;

use peggen_core::{Grammar, Rule};

use crate::config::Config;
use crate::expr::ExprCompiler;
use crate::rule::emit_rule;
use crate::Result;

const DEFAULT_PARSER_NAME: &str = "GeneratedParser";

const DEFAULT_HEADER: &str = "// @generated by peggen from {filename}\n\n#[allow(unused_imports)]\nuse {runtime}::{commit, ParserState, PegParser, Token, Value};";

const IMPL_LINTS: &str = "#[allow(\n    clippy::all,\n    irrefutable_let_patterns,\n    non_snake_case,\n    unreachable_code,\n    unused_assignments,\n    unused_mut,\n    unused_parens,\n    unused_variables\n)]";

/// Compiles every rule of a grammar, plus the helpers they need.
pub struct Generator<'g> {
    grammar: &'g Grammar,
    config: &'g Config,
    compiler: ExprCompiler<'g>,
}

impl<'g> Generator<'g> {
    pub fn new(grammar: &'g Grammar, config: &'g Config) -> Self {
        Self {
            grammar,
            config,
            compiler: ExprCompiler::new(grammar, &config.tokens),
        }
    }

    /// Parser type name: configured, else the `class` meta, else the default.
    pub fn parser_name(&self) -> &str {
        if let Some(name) = &self.config.parser_name {
            return name;
        }
        match self.grammar.meta("class") {
            Some(Some(name)) => name,
            _ => DEFAULT_PARSER_NAME,
        }
    }

    /// All rule routines, separated by blank lines.
    ///
    /// Grammar rules come in declaration order; each is followed by the
    /// helpers first discovered while compiling it.
    pub fn emit_rules(&mut self) -> Result<String> {
        let mut todo: VecDeque<Rule> = self.grammar.rules.values().cloned().collect();
        let mut routines = Vec::new();

        while let Some(rule) = todo.pop_front() {
            routines.push(emit_rule(&mut self.compiler, &rule)?);
            let discovered = self.compiler.registry().take_discovered();
            if !discovered.is_empty() {
                log::debug!("{} discovered {} helper(s)", rule.name, discovered.len());
            }
            for helper in discovered.into_iter().rev() {
                todo.push_front(helper);
            }
        }

        Ok(routines.join("\n\n"))
    }

    /// The complete generated module.
    pub fn emit(&mut self, filename: &str) -> Result<String> {
        let rules = self.emit_rules()?;
        let name = self.parser_name().to_string();
        let mut sections = Vec::new();

        if let Some(header) = self.template(self.config.header.as_deref(), "header", Some(DEFAULT_HEADER)) {
            let header = header.replace("{runtime}", &self.config.runtime_crate);
            sections.push(header.replace("{filename}", filename));
        }
        if let Some(subheader) = self.template(self.config.subheader.as_deref(), "subheader", None) {
            sections.push(subheader.replace("{filename}", filename));
        }

        sections.push(format!(
            "pub struct {name} {{\n    state: ParserState,\n}}\n\n\
             impl {name} {{\n    pub fn new(tokens: Vec<Token>) -> Self {{\n        Self {{\n            state: ParserState::new(tokens),\n        }}\n    }}\n}}\n\n\
             impl PegParser for {name} {{\n    fn state(&self) -> &ParserState {{\n        &self.state\n    }}\n\n    fn state_mut(&mut self) -> &mut ParserState {{\n        &mut self.state\n    }}\n}}"
        ));
        sections.push(format!("{IMPL_LINTS}\nimpl {name} {{\n{rules}\n}}"));

        if let Some(trailer) = self.template(self.config.trailer.as_deref(), "trailer", None) {
            sections.push(trailer.replace("{filename}", filename));
        }

        let sections: Vec<&str> = sections
            .iter()
            .map(|s| s.trim_end_matches('\n'))
            .filter(|s| !s.is_empty())
            .collect();
        let mut module = sections.join("\n\n");
        module.push('\n');
        Ok(module)
    }

    /// Configured text, else the grammar meta, else `default`.
    ///
    /// A meta without a value disables the section.
    fn template(&self, configured: Option<&str>, meta: &str, default: Option<&str>) -> Option<String> {
        if let Some(text) = configured {
            return Some(text.to_string());
        }
        match self.grammar.meta(meta) {
            Some(value) => value.map(str::to_string),
            None => default.map(str::to_string),
        }
    }
}
