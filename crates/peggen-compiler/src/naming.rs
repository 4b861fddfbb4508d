//! Names for helper rules and local bindings.
//!
//! Helper rules are keyed by the structure of the sub-expression they
//! compile, so the same repetition, group or gather used twice anywhere in
//! the grammar becomes one helper. Local bindings are deduplicated per
//! alternative.

use std::collections::{HashMap, HashSet};

use peggen_core::{Alt, Item, NamedItem, Rhs, Rule, RuleKind};

/// Registry of synthesized helper rules for one generation run.
pub struct Registry {
    counter: usize,
    /// Structural sub-expression -> helper name
    cache: HashMap<Item, String>,
    /// Names that helpers must not take (grammar rules and earlier helpers)
    taken: HashSet<String>,
    /// Helper name -> (result type, kind)
    signatures: HashMap<String, (String, RuleKind)>,
    /// Helpers registered since the last `take_discovered`
    discovered: Vec<Rule>,
    /// Local names used in the current alternative
    locals: HashSet<String>,
}

impl Registry {
    /// Create a registry that never hands out any of `rule_names`.
    pub fn new<'a>(rule_names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            counter: 0,
            cache: HashMap::new(),
            taken: rule_names.into_iter().map(str::to_string).collect(),
            signatures: HashMap::new(),
            discovered: Vec::new(),
            locals: HashSet::new(),
        }
    }

    /// Helper for a parenthesized choice. Groups produce the generic value type.
    pub fn name_group(&mut self, rhs: &Rhs) -> String {
        let key = Item::Group(rhs.clone());
        if let Some(name) = self.cache.get(&key) {
            return name.clone();
        }
        let name = self.fresh("_tmp");
        self.register(Rule::helper(&name, RuleKind::Group, rhs.clone()), "Value");
        self.cache.insert(key, name.clone());
        name
    }

    /// Helper for `node*` or, with `repeat1`, `node+`, collecting `elem_ty` values.
    pub fn name_loop(&mut self, node: &Item, repeat1: bool, elem_ty: &str) -> String {
        let (key, prefix, kind) = if repeat1 {
            (Item::Repeat1(Box::new(node.clone())), "_loop1", RuleKind::Loop1)
        } else {
            (Item::Repeat0(Box::new(node.clone())), "_loop0", RuleKind::Loop0)
        };
        if let Some(name) = self.cache.get(&key) {
            return name.clone();
        }
        let name = self.fresh(prefix);
        let rhs = Rhs::new(vec![Alt::new(vec![NamedItem::bare(node.clone())])]);
        self.register(Rule::helper(&name, kind, rhs), &format!("Vec<{elem_ty}>"));
        self.cache.insert(key, name.clone());
        name
    }

    /// Helper for `separator.node+`.
    ///
    /// Registers two rules: `_gather_N` matching the first element followed
    /// by `_loop0_M`, which collects each `separator node` pair's node.
    pub fn name_gather(&mut self, separator: &Item, node: &Item, elem_ty: &str) -> String {
        let key = Item::Gather {
            separator: Box::new(separator.clone()),
            node: Box::new(node.clone()),
        };
        if let Some(name) = self.cache.get(&key) {
            return name.clone();
        }
        let name = self.fresh("_gather");
        let tail = self.fresh("_loop0");

        let gather = Rhs::new(vec![Alt::new(vec![
            NamedItem::named("elem", node.clone()),
            NamedItem::named("seq", Item::Name(tail.clone())),
        ])]);
        let rest = Rhs::new(vec![
            Alt::new(vec![
                NamedItem::bare(separator.clone()),
                NamedItem::named("elem", node.clone()),
            ])
            .with_action("elem"),
        ]);
        let list_ty = format!("Vec<{elem_ty}>");
        self.register(Rule::helper(&name, RuleKind::Gather, gather), &list_ty);
        self.register(Rule::helper(&tail, RuleKind::Loop0, rest), &list_ty);
        self.cache.insert(key, name.clone());
        name
    }

    /// Result type and kind of a registered helper.
    pub fn signature(&self, name: &str) -> Option<(&str, RuleKind)> {
        self.signatures
            .get(name)
            .map(|(ty, kind)| (ty.as_str(), *kind))
    }

    /// Helpers registered since the previous call, in registration order.
    pub fn take_discovered(&mut self) -> Vec<Rule> {
        std::mem::take(&mut self.discovered)
    }

    /// Start a new alternative: all local names become available again.
    pub fn begin_alt(&mut self) {
        self.locals.clear();
    }

    /// Unique local name within the current alternative.
    ///
    /// The first request returns `name`; later ones return `name_2`,
    /// `name_3`, ... skipping suffixes already in use.
    pub fn dedupe(&mut self, name: &str) -> String {
        if self.locals.insert(name.to_string()) {
            return name.to_string();
        }

        let mut counter = 2;
        loop {
            let candidate = format!("{}_{}", name, counter);
            if self.locals.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }

    fn fresh(&mut self, prefix: &str) -> String {
        loop {
            self.counter += 1;
            let name = format!("{}_{}", prefix, self.counter);
            if self.taken.insert(name.clone()) {
                return name;
            }
        }
    }

    fn register(&mut self, mut rule: Rule, ty: &str) {
        log::debug!("registered helper {}: {}", rule.name, rule.rhs);
        rule.ty = Some(ty.to_string());
        self.signatures
            .insert(rule.name.clone(), (ty.to_string(), rule.kind));
        self.discovered.push(rule);
    }
}
