//! Node shapes that carry literal text, and the mutations applied to them.

use swc_atoms::Atom;
use swc_common::{DUMMY_SP, Span, SyntaxContext};
use swc_ecma_ast::{
    CallExpr, Callee, ComputedPropName, Expr, ExprOrSpread, Ident, JSXAttrValue,
    JSXElementChild, JSXExpr, JSXExprContainer, JSXText, Lit, PropName, Str, Tpl, TplElement,
};

/// A visited node whose payload is literal text.
#[derive(Debug, Clone, Copy)]
pub enum TextShape<'a> {
    /// `"..."` used as an expression.
    PlainLiteral(&'a Str),
    /// `{ "...": value }`
    PropertyKeyLiteral(&'a Str),
    /// `` `...${expr}...` ``
    InterpolatedText(&'a Tpl),
    /// `<input placeholder="..." />`
    MarkupAttributeLiteral(&'a Str),
    /// `<p>...</p>`
    MarkupText(&'a JSXText),
}

impl TextShape<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            TextShape::PlainLiteral(_) => ShapeKind::PlainLiteral,
            TextShape::PropertyKeyLiteral(_) => ShapeKind::PropertyKeyLiteral,
            TextShape::InterpolatedText(_) => ShapeKind::InterpolatedText,
            TextShape::MarkupAttributeLiteral(_) => ShapeKind::MarkupAttributeLiteral,
            TextShape::MarkupText(_) => ShapeKind::MarkupText,
        }
    }
}

/// Shape tag without the borrowed node, kept in [`super::Replacement`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    PlainLiteral,
    PropertyKeyLiteral,
    InterpolatedText,
    MarkupAttributeLiteral,
    MarkupText,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::PlainLiteral => "string",
            ShapeKind::PropertyKeyLiteral => "property-key",
            ShapeKind::InterpolatedText => "template",
            ShapeKind::MarkupAttributeLiteral => "jsx-attribute",
            ShapeKind::MarkupText => "jsx-text",
        }
    }
}

/// Change to apply to the node a [`TextShape`] was taken from.
///
/// Each variant is applied as a single assignment or splice, so a node is never
/// left half rewritten.
#[derive(Debug)]
pub enum Mutation {
    /// Replace the whole expression.
    ReplaceExpr(Box<Expr>),
    /// Replace an object member's key.
    ReplaceKey(PropName),
    /// Split template segments around new expression slots.
    SpliceSegments(Vec<SegmentSplice>),
    /// Replace a JSX attribute's value.
    ReplaceAttrValue(JSXAttrValue),
    /// Replace a JSX child.
    ReplaceChild(JSXElementChild),
}

/// One template segment to split, addressed by its index before any splicing.
#[derive(Debug)]
pub struct SegmentSplice {
    pub index: usize,
    pub call: Box<Expr>,
}

/// Build `callee("key")`.
///
/// `span` is the replaced node's span, so comments attached to it are still printed.
pub fn call_insertion(callee: &str, key: &str, span: Span) -> Box<Expr> {
    Box::new(Expr::Call(CallExpr {
        span,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(Expr::Ident(Ident::new_no_ctxt(
            Atom::from(callee),
            DUMMY_SP,
        )))),
        args: vec![ExprOrSpread {
            spread: None,
            expr: Box::new(Expr::Lit(Lit::Str(Str {
                span: DUMMY_SP,
                value: Atom::from(key).into(),
                raw: None,
            }))),
        }],
        type_args: None,
    }))
}

pub fn computed_key(span: Span, call: Box<Expr>) -> PropName {
    PropName::Computed(ComputedPropName { span, expr: call })
}

pub fn expr_container(span: Span, call: Box<Expr>) -> JSXExprContainer {
    JSXExprContainer {
        span,
        expr: JSXExpr::Expr(call),
    }
}

/// Split the segments named by `splices` in place.
///
/// `splices` must be sorted by index. Each splice turns one segment into two empty
/// segments with the call between them; segments and slots stay interleaved with
/// exactly one more segment than slots.
pub fn splice_segments(tpl: &mut Tpl, splices: Vec<SegmentSplice>) {
    for (inserted, splice) in splices.into_iter().enumerate() {
        // every earlier splice added one segment and one slot before this one
        let at = splice.index + inserted;
        let (span, tail) = (tpl.quasis[at].span, tpl.quasis[at].tail);

        tpl.quasis
            .splice(at..=at, [empty_segment(span, false), empty_segment(span, tail)]);
        tpl.exprs.insert(at, splice.call);

        debug_assert_eq!(tpl.quasis.len(), tpl.exprs.len() + 1);
    }
}

fn empty_segment(span: Span, tail: bool) -> TplElement {
    TplElement {
        span,
        tail,
        cooked: Some(Atom::default().into()),
        raw: Atom::default(),
    }
}
