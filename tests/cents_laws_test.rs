use cents_point::Cents;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn cents() -> impl Strategy<Value = Cents> {
    any::<i64>().prop_map(Cents::new)
}

proptest! {
    #[test]
    fn addition_is_associative(a in cents(), b in cents(), c in cents()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn addition_is_commutative(a in cents(), b in cents()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn double_negation_is_identity(a in cents()) {
        prop_assert_eq!(-(-a), a);
    }

    #[test]
    fn non_zero_matches_amount(amount in any::<i64>()) {
        prop_assert_eq!(Cents::new(amount).is_non_zero(), amount != 0);
    }

    #[test]
    fn ordering_is_trichotomous(a in cents(), b in cents()) {
        let holds = [a < b, a == b, b < a].iter().filter(|&&x| x).count();
        prop_assert_eq!(holds, 1);
        prop_assert_eq!(a.cmp(&b), a.get().cmp(&b.get()));
        prop_assert_eq!(a != b, !(a == b));
        prop_assert_eq!(a <= b, !(a > b));
        prop_assert_eq!(a >= b, !(a < b));
    }

    #[test]
    fn set_amount_is_visible_afterwards(start in any::<i64>(), next in any::<i64>()) {
        let mut value = Cents::new(start);
        value.set_amount(next);
        prop_assert_eq!(value.get(), next);
        prop_assert_eq!(value + Cents::ZERO, Cents::new(next));
    }

    #[test]
    fn display_is_the_bare_integer(amount in any::<i64>()) {
        prop_assert_eq!(Cents::new(amount).to_string(), amount.to_string());
    }

    #[test]
    fn shuffled_amounts_sort_ascending(seed in any::<u64>()) {
        let mut amounts: Vec<Cents> = (0..20).map(Cents::new).collect();
        amounts.shuffle(&mut StdRng::seed_from_u64(seed));

        amounts.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let sorted: Vec<i64> = amounts.iter().map(Cents::get).collect();
        prop_assert_eq!(sorted, (0..20).collect::<Vec<i64>>());
    }
}

#[test]
fn end_to_end_addition_chain() {
    let partial = Cents::new(6) + Cents::new(8);
    let total = partial + Cents::new(20);
    assert_eq!(total.get(), 34);
}

#[test]
fn negative_amount_formats_with_sign() {
    assert_eq!(Cents::new(6).to_string(), "6");
    assert_eq!(Cents::new(-6).to_string(), "-6");
}
