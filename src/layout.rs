//! Layout-compatible pointer and call adaptation.
//!
//! Two independently declared aggregate types whose members, in order, have
//! identical sizes and alignments may be interchanged at a call boundary: a
//! function over `&A` can be exposed as an `&B`-typed callable and invoked on
//! an actual `A`, and member access inside it must resolve to the same memory
//! offsets either way. Rust does not permit reinterpreting a function's
//! identity across formal parameter types, so the adaptation is expressed as
//! a thin wrapper that reinterprets only the pointer argument, gated by the
//! explicit [`LayoutCompatible`] relation.

/// Marker relation asserting that `Self` may be viewed in place as `T`.
///
/// # Safety
///
/// Implementors must guarantee that `Self` and `T` have identical member
/// layout: the same size, the same alignment, and fields that correspond
/// one-to-one at the same offsets with the same types. In practice both types
/// should carry `#[repr(C)]` (or another stable representation) so the
/// guarantee survives compilation. The relation is directional; declare both
/// directions if both are needed.
pub unsafe trait LayoutCompatible<T> {}

/// Views `value` in place as a `B`.
///
/// Size and alignment equality are checked at compile time; the field-level
/// correspondence is the implementor's obligation under [`LayoutCompatible`].
pub fn reinterpret<A, B>(value: &A) -> &B
where
    A: LayoutCompatible<B>,
{
    const {
        assert!(size_of::<A>() == size_of::<B>());
        assert!(align_of::<A>() == align_of::<B>());
    }
    unsafe { &*core::ptr::from_ref(value).cast::<B>() }
}

/// Wraps a function over `&A` as a callable over `&B`.
///
/// Invoking the returned closure on a reinterpreted `&B` behaves exactly as
/// invoking `f` on the original `&A`: the wrapper forwards the pointer with
/// its memory view unchanged.
pub fn adapt_fn<A, B, R>(f: fn(&A) -> R) -> impl Fn(&B) -> R
where
    B: LayoutCompatible<A>,
{
    move |arg| f(reinterpret(arg))
}
