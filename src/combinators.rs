// Function combinators

/// Wrap a two-argument function so it takes its arguments in reverse order.
///
/// `flip(f)(a, b) == f(b, a)`
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}
