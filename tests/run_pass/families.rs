//! Runs the generated arity families.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::rc::Rc;

#[path = "generated/tuple.rs"]
mod tuple;

#[path = "generated/pipe.rs"]
mod pipe;

#[path = "generated/apply_option.rs"]
mod apply_option;

#[path = "generated/apply_result.rs"]
mod apply_result;

#[path = "generated/bind.rs"]
mod bind;

#[path = "generated/di.rs"]
mod di;

#[path = "generated/rie.rs"]
mod rie;

#[path = "generated/generic"]
mod generic {
    pub mod rie;
}

fn main() {
    tuples();
    pipes();
    applicatives();
    binding();
    providers();
    readers();
}

// =============================================================================
// tuple
// =============================================================================

fn tuples() {
    use tuple::*;

    let add = |a: i32, b: i32, c: i32| a + b + c;
    assert_eq!(tupled3(add)(make_tuple3(1, 2, 3)), add(1, 2, 3));
    assert_eq!(untupled3(tupled3(add))(4, 5, 6), add(4, 5, 6));

    let triple = make_tuple3(1, "a", 2.5);
    assert_eq!(triple.into_tuple(), (1, "a", 2.5));
    assert_eq!(Tuple3::from((1, "a", 2.5)), triple);
    assert_eq!(triple.to_string(), "Tuple3[1, a, 2.5]");
    assert_eq!(make_tuple2(1, 2).map(|a| a * 10, |b| b + 1), make_tuple2(10, 3));

    let concat = |a: String, b: String| a + &b;
    let combine = semigroup2(|a: i32, b: i32| a + b, concat);
    assert_eq!(
        combine(make_tuple2(1, "x".to_string()), make_tuple2(2, "y".to_string())),
        make_tuple2(3, "xy".to_string())
    );

    let (empty, combine) = monoid2(0, |a: i32, b: i32| a + b, String::new(), concat);
    let value = make_tuple2(7, "z".to_string());
    assert_eq!(combine(empty.clone(), value.clone()), value);
    assert_eq!(combine(value.clone(), empty), value);

    let compare = ord2(|a: &i32, b: &i32| a.cmp(b), |a: &&str, b: &&str| b.cmp(a));
    assert_eq!(compare(&make_tuple2(1, "a"), &make_tuple2(2, "a")), Ordering::Less);
    assert_eq!(compare(&make_tuple2(1, "a"), &make_tuple2(1, "b")), Ordering::Greater);
    assert_eq!(compare(&make_tuple2(1, "a"), &make_tuple2(1, "a")), Ordering::Equal);
}

// =============================================================================
// pipe
// =============================================================================

fn pipes() {
    use pipe::*;

    let increment = |x: i32| x + 1;
    let double = |x: i32| x * 2;
    let show = |x: i32| x.to_string();
    assert_eq!(pipe0(5), 5);
    assert_eq!(pipe3(5, increment, double, show), show(double(increment(5))));

    let flowed = flow3(increment, double, show);
    assert_eq!(flowed(5), "12");
    assert_eq!(flowed(0), pipe3(0, increment, double, show));

    let volume = |l: u32, w: u32, h: u32| l * w * h;
    let curried = curry3(volume);
    let partial = curried(2);
    assert_eq!(partial(3)(4), volume(2, 3, 4));
    assert_eq!(partial(5)(1), volume(2, 5, 1));
    assert_eq!(curry1(|x: u32| x + 1)(1), 2);
    assert_eq!(uncurry3(curry3(volume))(2, 3, 4), volume(2, 3, 4));

    let nested = |a: u32| move |b: u32| move |c: u32| a * 100 + b * 10 + c;
    assert_eq!(uncurry3(nested)(1, 2, 3), 123);

    let sum_with = |base: i32, rest: Vec<i32>| base + rest.iter().sum::<i32>();
    assert_eq!(variadic1(sum_with)(1, &[2, 3]), 6);
    assert_eq!(unsliced1(sum_with)(1, [2, 3, 4]), 10);
    assert_eq!(variadic0(|rest: Vec<u8>| rest.len())(&[1, 2]), 2);
    let unvaried = unvariadic1(|base: i32, rest: &[i32]| base + rest.iter().sum::<i32>());
    assert_eq!(unvaried(1, vec![2, 3]), 6);
}

// =============================================================================
// apply
// =============================================================================

fn applicatives() {
    assert_eq!(
        apply_option::sequence_t3(Some(1), Some("a"), Some(2.0)),
        Some((1, "a", 2.0))
    );
    assert_eq!(apply_option::sequence_t2(Some(1), None::<u8>), None);
    assert_eq!(
        apply_result::sequence_tuple2((Ok::<u8, String>(1), Err::<u8, String>("bad".to_string()))),
        Err("bad".to_string())
    );

    let shift = apply_option::traverse_tuple2(|a: u8| a.checked_sub(1), |b: u8| b.checked_add(1));
    assert_eq!(shift((5, 6)), Some((4, 7)));
    assert_eq!(shift((0, 6)), None);

    let calls = RefCell::new(Vec::new());
    let checked = apply_result::traverse_tuple3(
        |a: i32| -> Result<i32, String> {
            calls.borrow_mut().push("f1");
            Ok(a * 2)
        },
        |b: i32| -> Result<i32, String> {
            calls.borrow_mut().push("f2");
            if b < 0 { Err(format!("negative {b}")) } else { Ok(b) }
        },
        |c: i32| -> Result<i32, String> {
            calls.borrow_mut().push("f3");
            Ok(c)
        },
    );
    assert_eq!(checked((1, 2, 3)), Ok((2, 2, 3)));
    assert_eq!(*calls.borrow(), ["f1", "f2", "f3"]);
    calls.borrow_mut().clear();
    assert_eq!(checked((1, -2, 3)), Err("negative -2".to_string()));
    assert_eq!(*calls.borrow(), ["f1", "f2"]);
}

// =============================================================================
// bind
// =============================================================================

fn binding() {
    use bind::*;

    let describe = |name: String, age: u32, city: &'static str| format!("{name} ({age}) from {city}");

    let from_london = bind_1_3_of_3(describe)("Ada".to_string(), "London");
    assert_eq!(from_london(36), describe("Ada".to_string(), 36, "London"));
    assert_eq!(from_london(37), "Ada (37) from London");

    let everything = bind_1_2_3_of_3(describe)("Bo".to_string(), 1, "Oslo");
    assert_eq!(everything(), "Bo (1) from Oslo");

    let ignoring = ignore_2_of_3(|name: String, city: &'static str| format!("{name}@{city}"));
    assert_eq!(ignoring("Cy".to_string(), 99_u32, "Rome"), "Cy@Rome");
}

// =============================================================================
// di
// =============================================================================

struct Injector {
    host: &'static str,
    port: Option<u16>,
}

fn providers() {
    use di::*;

    let log = Rc::new(RefCell::new(Vec::new()));
    let built = Rc::new(Cell::new(0));
    let host = {
        let log = Rc::clone(&log);
        move |injector: &Injector| -> Result<String, String> {
            log.borrow_mut().push("host");
            Ok(injector.host.to_string())
        }
    };
    let port = {
        let log = Rc::clone(&log);
        move |injector: &Injector| -> Result<u16, String> {
            log.borrow_mut().push("port");
            injector.port.ok_or_else(|| "no port".to_string())
        }
    };
    let factory = {
        let built = Rc::clone(&built);
        move |host: String, port: u16| -> Result<String, String> {
            built.set(built.get() + 1);
            Ok(format!("{host}:{port}"))
        }
    };

    let address = make_provider2("address", host.clone(), port.clone(), factory.clone());
    assert_eq!(address.name, "address");
    assert!(format!("{address:?}").contains("\"address\""));
    assert_eq!(
        address.provide(&Injector { host: "db", port: Some(5432) }),
        Ok("db:5432".to_string())
    );
    assert_eq!(*log.borrow(), ["host", "port"]);
    assert_eq!(built.get(), 1);

    log.borrow_mut().clear();
    let reversed = make_provider_factory2(port, host, move |port: u16, host: String| factory(host, port));
    assert_eq!(reversed(&Injector { host: "db", port: None }), Err("no port".to_string()));
    assert_eq!(*log.borrow(), ["port"]);
    assert_eq!(built.get(), 1);
}

// =============================================================================
// readerioeither
// =============================================================================

struct Config {
    base: i32,
}

fn readers() {
    let config = Config { base: 10 };

    let add = rie::eitherize1(|config: &Config, x: i32| -> Result<i32, String> {
        if x < 0 { Err("negative".to_string()) } else { Ok(config.base + x) }
    });
    assert_eq!(add(5)(&config), Ok(15));
    assert_eq!(add(-1)(&config), Err("negative".to_string()));

    let base = rie::eitherize0(|config: &Config| -> Result<i32, String> { Ok(config.base) });
    assert_eq!(base()(&config), Ok(10));

    let deferred = rie::from1(|config: &Config, x: i32| {
        let base = config.base;
        move || -> Result<i32, String> { Ok(base * x) }
    });
    assert_eq!(deferred(3)(&config), Ok(30));

    let plain = rie::uneitherize1(add);
    assert_eq!(plain(&config, 2), Ok(12));
    assert_eq!(plain(&Config { base: 1 }, -1), Err("negative".to_string()));
}
