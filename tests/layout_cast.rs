// tests/layout_cast.rs
use blockgrid_turtle::{GridWorld, TurtleEnv, adapt_fn, reinterpret};

// Two independently declared aggregates with identical member layout: one
// leading i32 field each. repr(C) pins the layout so the compatibility
// assertion is about declared shape, not compiler whim.
#[repr(C)]
struct Foo {
    x: i32,
}

#[repr(C)]
struct Bar {
    x: i32,
}

// SAFETY: Foo and Bar both consist of a single i32 at offset 0 under repr(C).
unsafe impl blockgrid_turtle::LayoutCompatible<Bar> for Foo {}
// SAFETY: as above, in the other direction.
unsafe impl blockgrid_turtle::LayoutCompatible<Foo> for Bar {}

fn foo_x(foo: &Foo) -> i32 {
    foo.x
}

#[test]
fn reinterpreted_pointer_reads_the_same_field() {
    let foo = Foo { x: 42 };
    let bar: &Bar = reinterpret(&foo);
    assert_eq!(bar.x, foo.x);
}

#[test]
fn adapted_call_matches_the_direct_call() {
    let foo = Foo { x: 42 };

    // The Bar-typed call surface for foo_x: same function body, pointer
    // argument reinterpreted, memory view unchanged.
    let bar_x = adapt_fn::<Foo, Bar, i32>(foo_x);
    let bar: &Bar = reinterpret(&foo);

    assert_eq!(foo_x(&foo), 42);
    assert_eq!(bar_x(bar), 42);
}

#[test]
fn both_call_paths_emit_identical_output() {
    let mut world = GridWorld::new();
    let foo = Foo { x: 42 };

    let direct = foo_x(&foo);
    world.emit(direct);

    let bar_x = adapt_fn::<Foo, Bar, i32>(foo_x);
    let adapted = bar_x(reinterpret(&foo));
    world.emit(adapted);

    assert_eq!(world.output(), &[42, 42]);
}
