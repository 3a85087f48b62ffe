use swc_common::{Span, util::take::Take};
use swc_ecma_ast::{
    Expr, JSXAttrValue, JSXElementChild, Lit, Module, PropName, Tpl, TplElement,
    TsGetterSignature, TsMethodSignature, TsPropertySignature, TsSetterSignature,
};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use super::shape::{
    Mutation, SegmentSplice, TextShape, call_insertion, computed_key, expr_container,
    splice_segments,
};
use super::{KeyGenerator, Replacement, RewriteSettings, Romanizer};

/// Single pass over a module that replaces target-script text with lookup calls.
///
/// Children are rewritten before their parent is inspected, so calls inserted by
/// this pass are never visited again.
pub struct Rewriter<'a, R: Romanizer> {
    settings: &'a RewriteSettings,
    keys: &'a KeyGenerator<R>,
    replacements: Vec<Replacement>,
}

impl<'a, R: Romanizer> Rewriter<'a, R> {
    pub fn new(settings: &'a RewriteSettings, keys: &'a KeyGenerator<R>) -> Self {
        Self {
            settings,
            keys,
            replacements: Vec::new(),
        }
    }

    pub fn rewrite(mut self, module: &mut Module) -> Vec<Replacement> {
        module.visit_mut_with(&mut self);
        self.replacements
    }

    /// Decide what to do with a text node. `None` leaves the node untouched.
    pub fn plan(&mut self, shape: TextShape<'_>) -> Option<Mutation> {
        match shape {
            TextShape::PlainLiteral(s) => {
                let call = self.lookup_call(&shape, s.value.as_str()?, s.span)?;
                Some(Mutation::ReplaceExpr(call))
            }
            TextShape::PropertyKeyLiteral(s) => {
                let call = self.lookup_call(&shape, s.value.as_str()?, s.span)?;
                Some(Mutation::ReplaceKey(computed_key(s.span, call)))
            }
            TextShape::InterpolatedText(tpl) => {
                let splices: Vec<SegmentSplice> = tpl
                    .quasis
                    .iter()
                    .enumerate()
                    .filter_map(|(index, quasi)| {
                        let call = self.lookup_call(&shape, segment_text(quasi), quasi.span)?;
                        Some(SegmentSplice { index, call })
                    })
                    .collect();
                (!splices.is_empty()).then_some(Mutation::SpliceSegments(splices))
            }
            TextShape::MarkupAttributeLiteral(s) => {
                let call = self.lookup_call(&shape, s.value.as_str()?, s.span)?;
                Some(Mutation::ReplaceAttrValue(JSXAttrValue::JSXExprContainer(
                    expr_container(s.span, call),
                )))
            }
            TextShape::MarkupText(text) => {
                let call = self.lookup_call(&shape, text.value.trim(), text.span)?;
                Some(Mutation::ReplaceChild(JSXElementChild::JSXExprContainer(
                    expr_container(text.span, call),
                )))
            }
        }
    }

    fn lookup_call(&mut self, shape: &TextShape<'_>, text: &str, span: Span) -> Option<Box<Expr>> {
        if !self.settings.should_rewrite(text) {
            return None;
        }

        let key = self.keys.generate(text);
        let call = call_insertion(&self.settings.callee, &key, span);
        self.replacements.push(Replacement {
            kind: shape.kind(),
            text: text.to_string(),
            key,
            span,
        });
        Some(call)
    }
}

/// Cooked value of a template segment, falling back to its raw source.
fn segment_text(quasi: &TplElement) -> &str {
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .unwrap_or(quasi.raw.as_str())
}

impl<R: Romanizer> VisitMut for Rewriter<'_, R> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        expr.visit_mut_children_with(self);

        let mutation = match &*expr {
            Expr::Lit(Lit::Str(s)) => self.plan(TextShape::PlainLiteral(s)),
            _ => None,
        };
        if let Some(Mutation::ReplaceExpr(call)) = mutation {
            *expr = *call;
        }
    }

    // Keys of type members are type-level names, a call there is not valid syntax.
    // The key is held out while the rest of the signature is visited.
    fn visit_mut_ts_property_signature(&mut self, sig: &mut TsPropertySignature) {
        let key = sig.key.take();
        sig.visit_mut_children_with(self);
        sig.key = key;
    }

    fn visit_mut_ts_method_signature(&mut self, sig: &mut TsMethodSignature) {
        let key = sig.key.take();
        sig.visit_mut_children_with(self);
        sig.key = key;
    }

    fn visit_mut_ts_getter_signature(&mut self, sig: &mut TsGetterSignature) {
        let key = sig.key.take();
        sig.visit_mut_children_with(self);
        sig.key = key;
    }

    fn visit_mut_ts_setter_signature(&mut self, sig: &mut TsSetterSignature) {
        let key = sig.key.take();
        sig.visit_mut_children_with(self);
        sig.key = key;
    }

    fn visit_mut_prop_name(&mut self, name: &mut PropName) {
        name.visit_mut_children_with(self);

        let mutation = match &*name {
            PropName::Str(s) => self.plan(TextShape::PropertyKeyLiteral(s)),
            _ => None,
        };
        if let Some(Mutation::ReplaceKey(key)) = mutation {
            *name = key;
        }
    }

    fn visit_mut_tpl(&mut self, tpl: &mut Tpl) {
        tpl.visit_mut_children_with(self);

        if let Some(Mutation::SpliceSegments(splices)) =
            self.plan(TextShape::InterpolatedText(tpl))
        {
            splice_segments(tpl, splices);
        }
    }

    fn visit_mut_jsx_attr_value(&mut self, value: &mut JSXAttrValue) {
        value.visit_mut_children_with(self);

        let mutation = match &*value {
            JSXAttrValue::Str(s) => self.plan(TextShape::MarkupAttributeLiteral(s)),
            _ => None,
        };
        if let Some(Mutation::ReplaceAttrValue(new_value)) = mutation {
            *value = new_value;
        }
    }

    fn visit_mut_jsx_element_child(&mut self, child: &mut JSXElementChild) {
        child.visit_mut_children_with(self);

        let mutation = match &*child {
            JSXElementChild::JSXText(text) => self.plan(TextShape::MarkupText(text)),
            _ => None,
        };
        if let Some(Mutation::ReplaceChild(new_child)) = mutation {
            *child = new_child;
        }
    }
}
