//! Runs the generated lens and prism accessors.

use std::rc::Rc;

mod model;

use model::*;
use runtime::optics::{Lens, Optional, Prism};

/// The optics surface the generated accessors import, with the same
/// signatures as `lambars::optics`.
mod runtime {
    pub mod optics {
        use std::marker::PhantomData;

        pub trait Lens<S, A> {
            fn get<'a>(&self, source: &'a S) -> &'a A;

            fn set(&self, source: S, value: A) -> S;
        }

        pub trait Prism<S, A> {
            fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

            fn review(&self, value: A) -> S;

            fn preview_owned(&self, source: S) -> Option<A>;
        }

        pub trait Optional<S, A> {
            fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

            fn set(&self, source: S, value: A) -> S;
        }

        pub struct FunctionLens<S, A, G, St>
        where
            G: Fn(&S) -> &A,
            St: Fn(S, A) -> S,
        {
            getter: G,
            setter: St,
            _marker: PhantomData<(S, A)>,
        }

        impl<S, A, G, St> FunctionLens<S, A, G, St>
        where
            G: Fn(&S) -> &A,
            St: Fn(S, A) -> S,
        {
            pub const fn new(getter: G, setter: St) -> Self {
                Self {
                    getter,
                    setter,
                    _marker: PhantomData,
                }
            }
        }

        impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
        where
            G: Fn(&S) -> &A,
            St: Fn(S, A) -> S,
        {
            fn get<'a>(&self, source: &'a S) -> &'a A {
                (self.getter)(source)
            }

            fn set(&self, source: S, value: A) -> S {
                (self.setter)(source, value)
            }
        }

        impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
        where
            G: Fn(&S) -> &A + Clone,
            St: Fn(S, A) -> S + Clone,
        {
            fn clone(&self) -> Self {
                Self::new(self.getter.clone(), self.setter.clone())
            }
        }

        pub struct FunctionPrism<S, A, Pr, Re, PrOwned>
        where
            Pr: Fn(&S) -> Option<&A>,
            Re: Fn(A) -> S,
            PrOwned: Fn(S) -> Option<A>,
        {
            preview_function: Pr,
            review_function: Re,
            preview_owned_function: PrOwned,
            _marker: PhantomData<(S, A)>,
        }

        impl<S, A, Pr, Re, PrOwned> FunctionPrism<S, A, Pr, Re, PrOwned>
        where
            Pr: Fn(&S) -> Option<&A>,
            Re: Fn(A) -> S,
            PrOwned: Fn(S) -> Option<A>,
        {
            pub const fn new(
                preview_function: Pr,
                review_function: Re,
                preview_owned_function: PrOwned,
            ) -> Self {
                Self {
                    preview_function,
                    review_function,
                    preview_owned_function,
                    _marker: PhantomData,
                }
            }
        }

        impl<S, A, Pr, Re, PrOwned> Prism<S, A> for FunctionPrism<S, A, Pr, Re, PrOwned>
        where
            Pr: Fn(&S) -> Option<&A>,
            Re: Fn(A) -> S,
            PrOwned: Fn(S) -> Option<A>,
        {
            fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
                (self.preview_function)(source)
            }

            fn review(&self, value: A) -> S {
                (self.review_function)(value)
            }

            fn preview_owned(&self, source: S) -> Option<A> {
                (self.preview_owned_function)(source)
            }
        }

        impl<S, A, Pr, Re, PrOwned> Clone for FunctionPrism<S, A, Pr, Re, PrOwned>
        where
            Pr: Fn(&S) -> Option<&A> + Clone,
            Re: Fn(A) -> S + Clone,
            PrOwned: Fn(S) -> Option<A> + Clone,
        {
            fn clone(&self) -> Self {
                Self::new(
                    self.preview_function.clone(),
                    self.review_function.clone(),
                    self.preview_owned_function.clone(),
                )
            }
        }

        pub struct LensPrismComposition<L, P, A> {
            lens: L,
            prism: P,
            _marker: PhantomData<A>,
        }

        impl<L, P, A> LensPrismComposition<L, P, A> {
            pub const fn new(lens: L, prism: P) -> Self {
                Self {
                    lens,
                    prism,
                    _marker: PhantomData,
                }
            }
        }

        impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
        where
            L: Lens<S, A>,
            P: Prism<A, B>,
            A: Clone + 'static,
        {
            fn get_option<'a>(&self, source: &'a S) -> Option<&'a B> {
                self.prism.preview(self.lens.get(source))
            }

            fn set(&self, source: S, value: B) -> S {
                self.lens.set(source, self.prism.review(value))
            }
        }

        impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
            fn clone(&self) -> Self {
                Self::new(self.lens.clone(), self.prism.clone())
            }
        }
    }
}

fn main() {
    owned_lenses();
    optionals();
    shared_lenses();
    generic_lenses();
    self_referential_fields();
    colliding_names();
    prisms();
}

fn owned_lenses() {
    let lenses = make_person_lenses();
    let ada = Person::new("Ada", 36);

    assert_eq!(lenses.name.get(&lenses.name.set(ada.clone(), "Grace".to_string())), "Grace");
    assert_eq!(lenses.age.set(ada.clone(), *lenses.age.get(&ada)), ada);
    assert_eq!(
        lenses.age.set(lenses.age.set(ada.clone(), 1), 2),
        lenses.age.set(ada.clone(), 2)
    );
    assert_eq!(ada.clone().with_nickname("Countess").nickname(), "Countess");
    assert_eq!(ada.nickname(), "");
}

fn optionals() {
    let lenses = make_person_lenses();
    let ada = Person::new("Ada", 36);

    assert_eq!(lenses.phone_o.get_option(&ada), None);
    let reachable = lenses.phone_o.set(ada.clone(), "555".to_string());
    assert_eq!(reachable.phone.as_deref(), Some("555"));
    assert_eq!(lenses.phone_o.get_option(&reachable), Some(&"555".to_string()));

    assert_eq!(lenses.age_o.get_option(&ada), Some(&36));
    assert_eq!(lenses.age_o.get_option(&lenses.age.set(ada.clone(), 0)), None);
    assert_eq!(lenses.name_o.get_option(&Person::new("", 1)), None);
}

fn shared_lenses() {
    let lenses = make_person_ref_lenses();

    let original = Rc::new(Person::new("Ada", 36));
    let renamed = lenses.name.set(Rc::clone(&original), "Grace".to_string());
    assert_eq!(original.name, "Ada");
    assert_eq!(renamed.name, "Grace");
    assert_eq!(lenses.age.get(&renamed), &36);

    let unique = Rc::new(Person::new("Bo", 1));
    let address = Rc::as_ptr(&unique);
    let updated = lenses.age.set(unique, 2);
    assert_eq!(Rc::as_ptr(&updated), address);
    assert_eq!(updated.age, 2);

    let phoned = lenses.phone_o.set(updated, "123".to_string());
    assert_eq!(lenses.phone_o.get_option(&phoned), Some(&"123".to_string()));
}

fn generic_lenses() {
    let lenses = make_wrapper_lenses::<Vec<u8>>();
    let wrapper = Wrapper {
        value: vec![1, 2],
        label: None,
    };

    assert_eq!(lenses.value.get(&wrapper), &vec![1, 2]);
    let labelled = lenses.label_o.set(wrapper.clone(), "bytes".to_string());
    assert_eq!(labelled.label.as_deref(), Some("bytes"));
    assert_eq!(lenses.value.set(labelled, vec![3]).value, vec![3]);

    let shared = make_wrapper_ref_lenses::<i32>();
    let boxed = Rc::new(Wrapper {
        value: 1,
        label: None,
    });
    assert_eq!(*shared.value.get(&shared.value.set(boxed, 5)), 5);
}

fn self_referential_fields() {
    let lenses = make_node_lenses();
    let tail = Node {
        value: 2,
        next: None,
    };

    let head = lenses.next_o.set(
        Node {
            value: 1,
            next: None,
        },
        Box::new(tail.clone()),
    );
    assert_eq!(lenses.next_o.get_option(&head).map(|next| next.value), Some(2));
    assert_eq!(lenses.next.get(&head).as_deref(), Some(&tail));
}

fn colliding_names() {
    let lenses = make_reading_lenses();
    let reading = Reading {
        value: Some(1),
        value_o: 7,
    };

    assert_eq!(lenses.value.get(&reading), &Some(1));
    assert_eq!(lenses.value_o.get(&reading), &7);
    assert_eq!(lenses.value_o_o.get_option(&reading), Some(&7));
}

fn prisms() {
    let shapes = make_shape_prisms();
    let circle = Shape::Circle(2.0);

    assert_eq!(shapes.circle.preview(&circle), Some(&2.0));
    assert_eq!(shapes.square.preview(&circle), None);
    assert_eq!(shapes.square.preview_owned(shapes.square.review(3.0)), Some(3.0));
    assert_eq!(shapes.circle.review(*shapes.circle.preview(&circle).unwrap()), circle);
    assert_eq!(shapes.empty.review(()), Shape::Empty);
    assert_eq!(shapes.empty.preview(&Shape::Empty), Some(&()));
    assert_eq!(
        shapes.empty.preview(&Shape::Rectangle {
            width: 1.0,
            height: 2.0
        }),
        None
    );

    let maybe = make_maybe_prisms::<String>();
    assert_eq!(maybe.just.preview_owned(Maybe::Just("x".to_string())), Some("x".to_string()));
    assert_eq!(maybe.just.preview(&Maybe::Nothing), None);
    assert_eq!(maybe.nothing.review(()), Maybe::Nothing);
}
