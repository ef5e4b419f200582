use crate::restriction::{CompositeRestriction, Restriction};

///
/// Normalize a restriction into a canonical form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Nested composites of the same kind are flattened
/// - Single-child composites are replaced by their child
/// - Absorbing elements collapse their parent:
///     ALL(.., ANY[], ..) → ANY[]
///     ANY(.., ALL[], ..) → ALL[]
/// - Child order is otherwise preserved
///
/// The rules are symmetric under ALL/ANY, so normalization commutes with
/// negation. Factories never normalize implicitly.
///
#[must_use]
pub fn normalize(restriction: &Restriction) -> Restriction {
    match restriction {
        Restriction::Basic(_) | Restriction::Text(_) => restriction.clone(),
        Restriction::Composite(composite) => normalize_composite(composite),
    }
}

fn normalize_composite(composite: &CompositeRestriction) -> Restriction {
    let kind = composite.kind();
    let mut out = Vec::with_capacity(composite.len());

    for child in composite {
        match normalize(child) {
            Restriction::Composite(inner) if inner.kind() == kind => {
                out.extend(inner.into_parts().1);
            }
            Restriction::Composite(inner) if inner.is_empty() => {
                // empty dual composite is the absorbing element for `kind`
                return Restriction::Composite(CompositeRestriction::new(kind.dual(), Vec::new()));
            }
            other => out.push(other),
        }
    }

    if out.len() == 1 {
        return out.swap_remove(0);
    }

    Restriction::Composite(CompositeRestriction::new(kind, out))
}
