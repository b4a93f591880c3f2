//! Style engine: the entry points the component layer calls per render.
//!
//! [`StyleEngine`] borrows an immutable [`Theme`]. It holds no state of its own,
//! so it is `Copy`, and one engine can be shared across rendering threads.

use crate::style::emit::{emit, emit_value, Emission, EmissionResult};
use crate::style::gap::{self, Direction, GapDirective};
use crate::style::property::StyleProperty;
use crate::style::responsive::{ResponsiveProp, Resolved};
use crate::style::shorthand::{self, ShorthandError, ShorthandQuad};
use crate::style::value::StyleValue;
use crate::theme::breakpoints::{Breakpoint, BreakpointTable};
use crate::theme::tokens::TokenRegistry;
use crate::theme::Theme;

/// Errors surfaced by [`StyleEngine::resolve_prop`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("invalid {property} at breakpoint `{breakpoint}`")]
    Shorthand {
        property: StyleProperty,
        breakpoint: String,
        #[source]
        source: ShorthandError,
    },
}

/// Style props of one component instance, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProps {
    props: Vec<(StyleProperty, ResponsiveProp<String>)>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop (builder style).
    pub fn with(mut self, property: StyleProperty, value: impl Into<ResponsiveProp<String>>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a prop. Setting one that is already present replaces its value and
    /// keeps its original position.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<ResponsiveProp<String>>) {
        let value = value.into();
        match self.props.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.props.push((property, value)),
        }
    }

    pub fn get(&self, property: StyleProperty) -> Option<&ResponsiveProp<String>> {
        self.props
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &ResponsiveProp<String>)> {
        self.props.iter().map(|(p, v)| (*p, v))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<V: Into<ResponsiveProp<String>>> FromIterator<(StyleProperty, V)> for StyleProps {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, V)>>(iter: I) -> Self {
        let mut props = StyleProps::new();
        for (property, value) in iter {
            props.set(property, value);
        }
        props
    }
}

/// Resolves style props against a theme.
#[derive(Debug, Clone, Copy)]
pub struct StyleEngine<'t> {
    tokens: &'t TokenRegistry,
    breakpoints: &'t BreakpointTable,
}

impl<'t> StyleEngine<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self::from_parts(&theme.tokens, &theme.breakpoints)
    }

    pub fn from_parts(tokens: &'t TokenRegistry, breakpoints: &'t BreakpointTable) -> Self {
        Self { tokens, breakpoints }
    }

    pub fn tokens(&self) -> &'t TokenRegistry {
        self.tokens
    }

    pub fn breakpoints(&self) -> &'t BreakpointTable {
        self.breakpoints
    }

    /// Canonically ordered `(breakpoint, value)` pairs of a responsive prop.
    pub fn resolve<'a, T>(&self, prop: &'a ResponsiveProp<T>) -> Vec<Resolved<'a, T>>
    where
        't: 'a,
    {
        prop.resolve(self.breakpoints)
    }

    /// Expand a box-model shorthand into four edges.
    pub fn expand_shorthand(&self, raw: &str) -> Result<ShorthandQuad, ShorthandError> {
        shorthand::expand(raw)
    }

    /// Emit one value of `property` at the named breakpoint. Unknown
    /// breakpoints emit nothing.
    pub fn emit(&self, property: StyleProperty, value: &str, breakpoint: &str) -> Emission {
        match self.breakpoints.get(breakpoint) {
            Some(bp) => emit(self.tokens, property, value, bp),
            None => {
                tracing::debug!(%property, %breakpoint, "dropping value for unknown breakpoint");
                Emission::none()
            }
        }
    }

    /// Resolve one prop across all of its breakpoints.
    ///
    /// Box-model shorthands are expanded per breakpoint. When all four edges
    /// agree the shorthand itself is emitted (`p-md`); otherwise each edge is
    /// emitted on its own (`p-top-sm p-right-md ...`).
    pub fn resolve_prop(
        &self,
        property: StyleProperty,
        value: &ResponsiveProp<String>,
    ) -> Result<EmissionResult, StyleError> {
        let mut result = EmissionResult::new();
        for Resolved { breakpoint, value } in self.resolve(value) {
            match property.edges() {
                Some(edges) => self.emit_shorthand(&mut result, property, edges, value, breakpoint)?,
                None => result.push(emit(self.tokens, property, value, breakpoint)),
            }
        }
        Ok(result)
    }

    fn emit_shorthand(
        &self,
        result: &mut EmissionResult,
        property: StyleProperty,
        edges: [StyleProperty; 4],
        raw: &str,
        breakpoint: &Breakpoint,
    ) -> Result<(), StyleError> {
        let quad = shorthand::expand(raw).map_err(|source| StyleError::Shorthand {
            property,
            breakpoint: breakpoint.name.clone(),
            source,
        })?;
        let category = property.category();
        let quad = quad.map(|slot| StyleValue::classify(self.tokens, category, slot));

        if quad.is_uniform() {
            result.push(emit_value(property, &quad.top, breakpoint));
        } else {
            result.extend(
                edges
                    .into_iter()
                    .zip(quad.edges())
                    .map(|(edge, value)| emit_value(edge, value, breakpoint)),
            );
        }
        Ok(())
    }

    /// Resolve every prop of a component, in declaration order.
    pub fn resolve_props(&self, props: &StyleProps) -> Result<EmissionResult, StyleError> {
        let mut result = EmissionResult::new();
        for (property, value) in props.iter() {
            result.merge(self.resolve_prop(property, value)?);
        }
        Ok(result)
    }

    /// Intermediate per-breakpoint gap directives.
    pub fn gap_directives(
        &self,
        direction: &ResponsiveProp<Direction>,
        gap: &ResponsiveProp<String>,
    ) -> Vec<GapDirective> {
        gap::gap_directives(self.breakpoints, self.tokens, direction, gap)
    }

    /// Margin output for every child except the last.
    pub fn translate_gap(
        &self,
        direction: &ResponsiveProp<Direction>,
        gap: &ResponsiveProp<String>,
    ) -> EmissionResult {
        gap::translate_gap(self.breakpoints, self.tokens, direction, gap)
    }

    /// Per-child margin output; the last child's entry is empty.
    pub fn child_gaps(
        &self,
        direction: &ResponsiveProp<Direction>,
        gap: &ResponsiveProp<String>,
        child_count: usize,
    ) -> Vec<EmissionResult> {
        gap::child_gaps(self.breakpoints, self.tokens, direction, gap, child_count)
    }
}
