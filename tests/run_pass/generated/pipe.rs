// Code generated by fpgen. DO NOT EDIT.
// This file was generated by robots at
// 2024-01-02T03:04:05Z
// family: pipe, count: 4

#![allow(
    unexpected_cfgs,
    unused_imports,
    clippy::many_single_char_names,
    clippy::too_many_arguments,
    clippy::type_complexity
)]

use std::rc::Rc;

/// Passes `t0` through 0 functions, left to right.
pub fn pipe0<T0>(t0: T0) -> T0 {
    t0
}

/// Adapts a function taking 0 fixed arguments and a `Vec` to take a slice instead.
pub fn variadic0<V, R, F>(f: F) -> impl Fn(&[V]) -> R
where
    F: Fn(Vec<V>) -> R,
    V: Clone,
{
    move |values: &[V]| f(values.to_vec())
}

/// Adapts a function taking 0 fixed arguments and a slice to take a `Vec` instead.
pub fn unvariadic0<V, R, F>(f: F) -> impl Fn(Vec<V>) -> R
where
    F: Fn(&[V]) -> R,
{
    move |values: Vec<V>| f(&values)
}

/// Adapts a function taking 0 fixed arguments and a `Vec` to take a fixed-size array.
pub fn unsliced0<V, R, F, const N: usize>(f: F) -> impl Fn([V; N]) -> R
where
    F: Fn(Vec<V>) -> R,
{
    move |values: [V; N]| f(Vec::from(values))
}

/// Passes `t0` through 1 functions, left to right.
pub fn pipe1<T0, T1, F1>(t0: T0, f1: F1) -> T1
where
    F1: FnOnce(T0) -> T1,
{
    f1(t0)
}

/// Composes 1 functions, left to right.
pub fn flow1<T0, T1, F1>(f1: F1) -> impl Fn(T0) -> T1
where
    F1: Fn(T0) -> T1,
{
    move |t0: T0| f1(t0)
}

/// Turns a function of 1 arguments into a chain of one-argument functions.
pub fn curry1<T1, R, F>(f: F) -> impl Fn(T1) -> R
where
    F: Fn(T1) -> R,
{
    move |t1: T1| f(t1)
}

/// Turns a chain of 1 one-argument functions back into one function.
pub fn uncurry1<T1, R, F>(f: F) -> impl Fn(T1) -> R
where
    F: Fn(T1) -> R,
{
    move |t1: T1| f(t1)
}

/// Adapts a function taking 1 fixed arguments and a `Vec` to take a slice instead.
pub fn variadic1<T1, V, R, F>(f: F) -> impl Fn(T1, &[V]) -> R
where
    F: Fn(T1, Vec<V>) -> R,
    V: Clone,
{
    move |t1: T1, values: &[V]| f(t1, values.to_vec())
}

/// Adapts a function taking 1 fixed arguments and a slice to take a `Vec` instead.
pub fn unvariadic1<T1, V, R, F>(f: F) -> impl Fn(T1, Vec<V>) -> R
where
    F: Fn(T1, &[V]) -> R,
{
    move |t1: T1, values: Vec<V>| f(t1, &values)
}

/// Adapts a function taking 1 fixed arguments and a `Vec` to take a fixed-size array.
pub fn unsliced1<T1, V, R, F, const N: usize>(f: F) -> impl Fn(T1, [V; N]) -> R
where
    F: Fn(T1, Vec<V>) -> R,
{
    move |t1: T1, values: [V; N]| f(t1, Vec::from(values))
}

/// Passes `t0` through 2 functions, left to right.
pub fn pipe2<T0, T1, T2, F1, F2>(t0: T0, f1: F1, f2: F2) -> T2
where
    F1: FnOnce(T0) -> T1,
    F2: FnOnce(T1) -> T2,
{
    f2(f1(t0))
}

/// Composes 2 functions, left to right.
pub fn flow2<T0, T1, T2, F1, F2>(f1: F1, f2: F2) -> impl Fn(T0) -> T2
where
    F1: Fn(T0) -> T1,
    F2: Fn(T1) -> T2,
{
    move |t0: T0| f2(f1(t0))
}

/// Turns a function of 2 arguments into a chain of one-argument functions.
///
/// Arguments supplied to an outer level are cloned for every call of an inner level.
pub fn curry2<T1, T2, R, F>(f: F) -> impl Fn(T1) -> Box<dyn Fn(T2) -> R>
where
    F: Fn(T1, T2) -> R + 'static,
    T1: Clone + 'static,
    T2: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |t1: T1| -> Box<dyn Fn(T2) -> R> {
        let f = Rc::clone(&f);
        let t1 = Rc::new(t1);
        Box::new(move |t2: T2| {
            f(Rc::unwrap_or_clone(Rc::clone(&t1)), t2)
        })
    }
}

/// Turns a chain of 2 one-argument functions back into one function.
pub fn uncurry2<T1, T2, R, F, G2>(f: F) -> impl Fn(T1, T2) -> R
where
    F: Fn(T1) -> G2,
    G2: Fn(T2) -> R,
{
    move |t1: T1, t2: T2| f(t1)(t2)
}

/// Adapts a function taking 2 fixed arguments and a `Vec` to take a slice instead.
pub fn variadic2<T1, T2, V, R, F>(f: F) -> impl Fn(T1, T2, &[V]) -> R
where
    F: Fn(T1, T2, Vec<V>) -> R,
    V: Clone,
{
    move |t1: T1, t2: T2, values: &[V]| f(t1, t2, values.to_vec())
}

/// Adapts a function taking 2 fixed arguments and a slice to take a `Vec` instead.
pub fn unvariadic2<T1, T2, V, R, F>(f: F) -> impl Fn(T1, T2, Vec<V>) -> R
where
    F: Fn(T1, T2, &[V]) -> R,
{
    move |t1: T1, t2: T2, values: Vec<V>| f(t1, t2, &values)
}

/// Adapts a function taking 2 fixed arguments and a `Vec` to take a fixed-size array.
pub fn unsliced2<T1, T2, V, R, F, const N: usize>(f: F) -> impl Fn(T1, T2, [V; N]) -> R
where
    F: Fn(T1, T2, Vec<V>) -> R,
{
    move |t1: T1, t2: T2, values: [V; N]| f(t1, t2, Vec::from(values))
}

/// Passes `t0` through 3 functions, left to right.
pub fn pipe3<T0, T1, T2, T3, F1, F2, F3>(t0: T0, f1: F1, f2: F2, f3: F3) -> T3
where
    F1: FnOnce(T0) -> T1,
    F2: FnOnce(T1) -> T2,
    F3: FnOnce(T2) -> T3,
{
    f3(f2(f1(t0)))
}

/// Composes 3 functions, left to right.
pub fn flow3<T0, T1, T2, T3, F1, F2, F3>(f1: F1, f2: F2, f3: F3) -> impl Fn(T0) -> T3
where
    F1: Fn(T0) -> T1,
    F2: Fn(T1) -> T2,
    F3: Fn(T2) -> T3,
{
    move |t0: T0| f3(f2(f1(t0)))
}

/// Turns a function of 3 arguments into a chain of one-argument functions.
///
/// Arguments supplied to an outer level are cloned for every call of an inner level.
pub fn curry3<T1, T2, T3, R, F>(f: F) -> impl Fn(T1) -> Box<dyn Fn(T2) -> Box<dyn Fn(T3) -> R>>
where
    F: Fn(T1, T2, T3) -> R + 'static,
    T1: Clone + 'static,
    T2: Clone + 'static,
    T3: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |t1: T1| -> Box<dyn Fn(T2) -> Box<dyn Fn(T3) -> R>> {
        let f = Rc::clone(&f);
        let t1 = Rc::new(t1);
        Box::new(move |t2: T2| -> Box<dyn Fn(T3) -> R> {
            let f = Rc::clone(&f);
            let t1 = Rc::clone(&t1);
            let t2 = Rc::new(t2);
            Box::new(move |t3: T3| {
                f(Rc::unwrap_or_clone(Rc::clone(&t1)), Rc::unwrap_or_clone(Rc::clone(&t2)), t3)
            })
        })
    }
}

/// Turns a chain of 3 one-argument functions back into one function.
pub fn uncurry3<T1, T2, T3, R, F, G2, G3>(f: F) -> impl Fn(T1, T2, T3) -> R
where
    F: Fn(T1) -> G2,
    G2: Fn(T2) -> G3,
    G3: Fn(T3) -> R,
{
    move |t1: T1, t2: T2, t3: T3| f(t1)(t2)(t3)
}

/// Adapts a function taking 3 fixed arguments and a `Vec` to take a slice instead.
pub fn variadic3<T1, T2, T3, V, R, F>(f: F) -> impl Fn(T1, T2, T3, &[V]) -> R
where
    F: Fn(T1, T2, T3, Vec<V>) -> R,
    V: Clone,
{
    move |t1: T1, t2: T2, t3: T3, values: &[V]| f(t1, t2, t3, values.to_vec())
}

/// Adapts a function taking 3 fixed arguments and a slice to take a `Vec` instead.
pub fn unvariadic3<T1, T2, T3, V, R, F>(f: F) -> impl Fn(T1, T2, T3, Vec<V>) -> R
where
    F: Fn(T1, T2, T3, &[V]) -> R,
{
    move |t1: T1, t2: T2, t3: T3, values: Vec<V>| f(t1, t2, t3, &values)
}

/// Adapts a function taking 3 fixed arguments and a `Vec` to take a fixed-size array.
pub fn unsliced3<T1, T2, T3, V, R, F, const N: usize>(f: F) -> impl Fn(T1, T2, T3, [V; N]) -> R
where
    F: Fn(T1, T2, T3, Vec<V>) -> R,
{
    move |t1: T1, t2: T2, t3: T3, values: [V; N]| f(t1, t2, t3, Vec::from(values))
}

/// Passes `t0` through 4 functions, left to right.
pub fn pipe4<T0, T1, T2, T3, T4, F1, F2, F3, F4>(t0: T0, f1: F1, f2: F2, f3: F3, f4: F4) -> T4
where
    F1: FnOnce(T0) -> T1,
    F2: FnOnce(T1) -> T2,
    F3: FnOnce(T2) -> T3,
    F4: FnOnce(T3) -> T4,
{
    f4(f3(f2(f1(t0))))
}

/// Composes 4 functions, left to right.
pub fn flow4<T0, T1, T2, T3, T4, F1, F2, F3, F4>(f1: F1, f2: F2, f3: F3, f4: F4) -> impl Fn(T0) -> T4
where
    F1: Fn(T0) -> T1,
    F2: Fn(T1) -> T2,
    F3: Fn(T2) -> T3,
    F4: Fn(T3) -> T4,
{
    move |t0: T0| f4(f3(f2(f1(t0))))
}

/// Turns a function of 4 arguments into a chain of one-argument functions.
///
/// Arguments supplied to an outer level are cloned for every call of an inner level.
pub fn curry4<T1, T2, T3, T4, R, F>(f: F) -> impl Fn(T1) -> Box<dyn Fn(T2) -> Box<dyn Fn(T3) -> Box<dyn Fn(T4) -> R>>>
where
    F: Fn(T1, T2, T3, T4) -> R + 'static,
    T1: Clone + 'static,
    T2: Clone + 'static,
    T3: Clone + 'static,
    T4: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |t1: T1| -> Box<dyn Fn(T2) -> Box<dyn Fn(T3) -> Box<dyn Fn(T4) -> R>>> {
        let f = Rc::clone(&f);
        let t1 = Rc::new(t1);
        Box::new(move |t2: T2| -> Box<dyn Fn(T3) -> Box<dyn Fn(T4) -> R>> {
            let f = Rc::clone(&f);
            let t1 = Rc::clone(&t1);
            let t2 = Rc::new(t2);
            Box::new(move |t3: T3| -> Box<dyn Fn(T4) -> R> {
                let f = Rc::clone(&f);
                let t1 = Rc::clone(&t1);
                let t2 = Rc::clone(&t2);
                let t3 = Rc::new(t3);
                Box::new(move |t4: T4| {
                    f(Rc::unwrap_or_clone(Rc::clone(&t1)), Rc::unwrap_or_clone(Rc::clone(&t2)), Rc::unwrap_or_clone(Rc::clone(&t3)), t4)
                })
            })
        })
    }
}

/// Turns a chain of 4 one-argument functions back into one function.
pub fn uncurry4<T1, T2, T3, T4, R, F, G2, G3, G4>(f: F) -> impl Fn(T1, T2, T3, T4) -> R
where
    F: Fn(T1) -> G2,
    G2: Fn(T2) -> G3,
    G3: Fn(T3) -> G4,
    G4: Fn(T4) -> R,
{
    move |t1: T1, t2: T2, t3: T3, t4: T4| f(t1)(t2)(t3)(t4)
}

/// Adapts a function taking 4 fixed arguments and a `Vec` to take a slice instead.
pub fn variadic4<T1, T2, T3, T4, V, R, F>(f: F) -> impl Fn(T1, T2, T3, T4, &[V]) -> R
where
    F: Fn(T1, T2, T3, T4, Vec<V>) -> R,
    V: Clone,
{
    move |t1: T1, t2: T2, t3: T3, t4: T4, values: &[V]| f(t1, t2, t3, t4, values.to_vec())
}

/// Adapts a function taking 4 fixed arguments and a slice to take a `Vec` instead.
pub fn unvariadic4<T1, T2, T3, T4, V, R, F>(f: F) -> impl Fn(T1, T2, T3, T4, Vec<V>) -> R
where
    F: Fn(T1, T2, T3, T4, &[V]) -> R,
{
    move |t1: T1, t2: T2, t3: T3, t4: T4, values: Vec<V>| f(t1, t2, t3, t4, &values)
}

/// Adapts a function taking 4 fixed arguments and a `Vec` to take a fixed-size array.
pub fn unsliced4<T1, T2, T3, T4, V, R, F, const N: usize>(f: F) -> impl Fn(T1, T2, T3, T4, [V; N]) -> R
where
    F: Fn(T1, T2, T3, T4, Vec<V>) -> R,
{
    move |t1: T1, t2: T2, t3: T3, t4: T4, values: [V; N]| f(t1, t2, t3, t4, Vec::from(values))
}

