//! Supply-circuit advisory table.
//!
//! Encodes the fixed electrician heuristics for residential mini-split
//! installs: higher capacity and longer runs push toward thicker wire,
//! inverter units at short runs are allowed a thinner conductor in some
//! tiers, and the supply voltage decides the breaker pole count.
//!
//! The table is total: every combination of the enumerated inputs gets an
//! answer. Combinations outside the installer norm (anything above 1 Ton on
//! a 110 V circuit) are answered conservatively and carry a caution note
//! instead of failing. Exhaustiveness is compiler-checked; there is no
//! default arm for unrecognized input to fall into.

use crate::domain::model::{
    BreakerRating, Capacity, Distance, SizingInput, SizingResult, Technology, Voltage, WireGauge,
};

/// Looks up the recommended conductor gauge and breaker for one install.
///
/// Pure and deterministic; the same input always yields the same result.
pub fn size_supply_circuit(input: SizingInput) -> SizingResult {
    use Capacity::*;
    use Distance::*;
    use Technology::*;
    use Voltage::*;
    use WireGauge::*;

    let (wire_gauge, breaker) = match (input.capacity, input.voltage) {
        (OneTon, V110) => (
            match (input.technology, input.distance) {
                (Inverter, Short) => Awg14,
                _ => Awg12,
            },
            BreakerRating::single(15),
        ),
        (OneTon, V220) => (
            // Same gauge for both technologies at this tier.
            match input.distance {
                Short => Awg14,
                Long => Awg12,
            },
            BreakerRating::double(10),
        ),
        (OneAndHalfTon | TwoTon, V220) => (
            match (input.technology, input.distance) {
                (Inverter, Short) => Awg14,
                _ => Awg12,
            },
            BreakerRating::double(15),
        ),
        (ThreeTon, V220) => (
            match input.distance {
                Short => Awg12,
                Long => Awg10,
            },
            BreakerRating::double(20),
        ),
        // Out-of-norm 110 V tiers: one gauge thicker than the 220 V answer,
        // single-pole breaker, caution attached below.
        (OneAndHalfTon | TwoTon, V110) => (Awg10, BreakerRating::single(20)),
        (ThreeTon, V110) => (Awg8, BreakerRating::single(30)),
    };

    SizingResult {
        wire_gauge,
        breaker,
        note: out_of_norm_note(input.capacity, input.voltage),
    }
}

fn out_of_norm_note(capacity: Capacity, voltage: Voltage) -> Option<String> {
    match (capacity, voltage) {
        (Capacity::OneTon, _) | (_, Voltage::V220) => None,
        (capacity, Voltage::V110) => Some(format!(
            "{} equipment on a 110V branch circuit is outside the recommended \
             range; a conservative sizing is shown. Have a licensed electrician \
             verify the installation before energizing.",
            capacity
        )),
    }
}
