use pretty_assertions::assert_eq;
use rich_enum::{
    declare_enum, enum_to_string, enum_to_string_or, register_enum, EnumTraits, ParseError,
    RichEnum,
};

declare_enum!(TestEnum, state0, (state1, 4), (state2, 97), state3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CustomEnum {
    Field0,
    Field1 = 37,
    Field2,
}

mod custom_str {
    pub const FIELD0: &str = "field0";
    pub const FIELD1: &str = "field1";
    pub const FIELD2: &str = "field2";
}

register_enum!(CustomEnum {
    custom_str::FIELD0 => CustomEnum::Field0,
    custom_str::FIELD1 => CustomEnum::Field1,
    custom_str::FIELD2 => CustomEnum::Field2,
});

/// Runs the name/value contract shared by every bound enum.
fn check_contract<E: RichEnum + PartialEq + std::fmt::Debug>(sentinel: E, undeclared: E::Repr) {
    type T<X> = EnumTraits<X>;

    assert_eq!(T::<E>::repr_to_string(undeclared), None);
    assert_eq!(T::<E>::repr_to_string_or(undeclared, ""), "");
    assert_eq!(T::<E>::from_repr(undeclared), None);

    for entry in T::<E>::entries() {
        let name = entry.name;
        assert_eq!(T::<E>::to_string(entry.value), Some(name));
        assert_eq!(T::<E>::to_string_or(entry.value, ""), name);
        assert_eq!(enum_to_string(entry.value), Some(name));
        assert_eq!(enum_to_string_or(entry.value, "?"), name);
        assert_eq!(T::<E>::from_repr(entry.value.to_repr()), Some(entry.value));

        assert_eq!(T::<E>::parse(name), Ok(entry.value));
        assert_eq!(T::<E>::parse(&name.to_string()), Ok(entry.value));
        assert_eq!(T::<E>::parse_range(name.as_bytes(), 0..name.len()), Ok(entry.value));
        assert!(T::<E>::parse_range(name.as_bytes(), 0..0).is_err());
        assert!(T::<E>::parse_range(name.as_bytes(), 0..name.len() - 1).is_err());
        assert!(T::<E>::parse(&name[..name.len() - 1]).is_err());

        let extended = format!("{name}invalid");
        assert!(T::<E>::parse(&extended).is_err());
        assert!(T::<E>::parse_range(extended.as_bytes(), 0..extended.len()).is_err());
        assert_eq!(
            T::<E>::parse_range(extended.as_bytes(), 0..name.len()),
            Ok(entry.value)
        );

        let mut out = sentinel;
        assert!(T::<E>::try_parse(&mut out, name));
        assert_eq!(out, entry.value);

        let mut out = sentinel;
        assert!(T::<E>::try_parse_range(&mut out, name.as_bytes(), 0..name.len()));
        assert_eq!(out, entry.value);

        let mut out = sentinel;
        assert!(!T::<E>::try_parse_range(&mut out, name.as_bytes(), 0..0));
        assert!(!T::<E>::try_parse_range(&mut out, name.as_bytes(), 0..name.len() - 1));
        assert!(!T::<E>::try_parse(&mut out, &extended));
        assert!(!T::<E>::try_parse_range(&mut out, extended.as_bytes(), 0..extended.len()));
        assert_eq!(out, sentinel);
    }

    let mut out = sentinel;
    assert!(!T::<E>::try_parse(&mut out, ""));
    assert!(!T::<E>::try_parse(&mut out, "invalid"));
    assert_eq!(out, sentinel);
    assert!(T::<E>::parse("").is_err());
    assert!(T::<E>::parse("invalid").is_err());
}

#[test]
fn declare_enum() {
    assert_eq!(TestEnum::state0 as i32, 0);
    assert_eq!(TestEnum::state1 as i32, 4);
    assert_eq!(TestEnum::state2 as i32, 97);
    assert_eq!(TestEnum::state3 as i32, 98);

    assert_eq!(CustomEnum::Field0 as i32, 0);
    assert_eq!(CustomEnum::Field1 as i32, 37);
    assert_eq!(CustomEnum::Field2 as i32, 38);
}

#[test]
fn to_string() {
    type Traits = EnumTraits<TestEnum>;
    assert_eq!(Traits::repr_to_string(-1), None);
    assert_eq!(Traits::to_string(TestEnum::state0), Some("state0"));
    assert_eq!(Traits::to_string(TestEnum::state1), Some("state1"));
    assert_eq!(Traits::to_string(TestEnum::state2), Some("state2"));
    assert_eq!(Traits::to_string(TestEnum::state3), Some("state3"));
    assert_eq!(Traits::repr_to_string_or(-1, ""), "");
    assert_eq!(Traits::to_string_or(TestEnum::state2, ""), "state2");

    type Custom = EnumTraits<CustomEnum>;
    assert_eq!(Custom::repr_to_string(-1), None);
    assert_eq!(Custom::to_string(CustomEnum::Field0), Some("field0"));
    assert_eq!(Custom::to_string(CustomEnum::Field1), Some("field1"));
    assert_eq!(Custom::to_string(CustomEnum::Field2), Some("field2"));
    assert_eq!(Custom::repr_to_string_or(-1, "unknown"), "unknown");
}

#[test]
fn enum_to_string_shim() {
    assert_eq!(enum_to_string(TestEnum::state1), Some("state1"));
    assert_eq!(enum_to_string_or(TestEnum::state3, ""), "state3");
    assert_eq!(enum_to_string(CustomEnum::Field1), Some("field1"));
    assert_eq!(enum_to_string_or(CustomEnum::Field2, ""), "field2");
}

#[test]
fn parse() {
    type Traits = EnumTraits<TestEnum>;
    assert_eq!(Traits::parse("state2"), Ok(TestEnum::state2));
    assert_eq!(Traits::parse(b"state3".as_slice()), Ok(TestEnum::state3));
    assert_eq!(
        Traits::parse("state2invalid"),
        Err(ParseError::Unknown {
            type_name: "TestEnum",
            len: 13
        })
    );
    assert_eq!(
        Traits::parse(""),
        Err(ParseError::Empty {
            type_name: "TestEnum"
        })
    );
    assert_eq!(
        Traits::parse_range(b"state0", 2..9),
        Err(ParseError::InvalidRange {
            start: 2,
            end: 9,
            len: 6
        })
    );
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 4..2;
    assert!(Traits::parse_range(b"state0", reversed).is_err());
}

#[test]
fn parse_inline_span() {
    let line = b"level=state1;mode=field2\0garbage";
    assert_eq!(
        EnumTraits::<TestEnum>::parse_range(line, 6..12),
        Ok(TestEnum::state1)
    );
    assert_eq!(
        EnumTraits::<CustomEnum>::parse_range(line, 18..24),
        Ok(CustomEnum::Field2)
    );
    assert!(EnumTraits::<CustomEnum>::parse_range(line, 18..25).is_err());
}

#[test]
fn contract() {
    check_contract(TestEnum::state0, -1);
    check_contract(CustomEnum::Field0, -1);
}

#[test]
fn display_and_from_str() {
    assert_eq!(TestEnum::state2.to_string(), "state2");
    assert_eq!(format!("{:>8}|", TestEnum::state0), "  state0|");
    assert_eq!("state3".parse::<TestEnum>(), Ok(TestEnum::state3));
    assert!("State3".parse::<TestEnum>().is_err());
}

#[test]
fn repr_and_attributes() {
    declare_enum!(
        /// Wire opcode.
        #[derive(Default)]
        pub(crate) Opcode: u8,
        #[default]
        nop,
        (load, 0x10),
        store,
        (halt, 255),
    );

    assert_eq!(Opcode::default(), Opcode::nop);
    assert_eq!(Opcode::store as u8, 0x11);
    assert_eq!(std::mem::size_of::<Opcode>(), 1);
    assert_eq!(EnumTraits::<Opcode>::repr_to_string(255), Some("halt"));
    assert_eq!(EnumTraits::<Opcode>::from_repr(0x11), Some(Opcode::store));
    assert_eq!(<Opcode as RichEnum>::TYPE_NAME, "Opcode");
}

#[test]
fn negative_values() {
    declare_enum!(Signed: i8, (low, -128), next, (zero, 0), (high, 127));

    assert_eq!(Signed::next as i8, -127);
    assert_eq!(EnumTraits::<Signed>::repr_to_string(-128), Some("low"));
    assert_eq!(EnumTraits::<Signed>::parse("high"), Ok(Signed::high));
}

#[test]
fn value_from_constant() {
    const BASE: u16 = 1000;
    declare_enum!(Status: u16, (ok, BASE), created, (teapot, BASE + 418));

    assert_eq!(Status::created as u16, 1001);
    assert_eq!(Status::teapot as u16, 1418);
    assert_eq!(enum_to_string(Status::teapot), Some("teapot"));
}

#[test]
fn entries_keep_declaration_order() {
    declare_enum!(Shuffled, (c, 3), (a, 1), (b, 2));

    let names: Vec<_> = EnumTraits::<Shuffled>::entries()
        .iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, ["c", "a", "b"]);
    assert_eq!(Shuffled::lookup_table().len(), 3);
}

#[test]
fn shared_value_resolves_to_first_name() {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[repr(u8)]
    enum Mode {
        Read = 1,
        Write = 2,
    }

    register_enum!(Mode: u8 {
        "read" => Mode::Read,
        "r" => Mode::Read,
        "write" => Mode::Write,
    });

    assert_eq!(EnumTraits::<Mode>::to_string(Mode::Read), Some("read"));
    assert_eq!(EnumTraits::<Mode>::parse("r"), Ok(Mode::Read));
    assert_eq!(EnumTraits::<Mode>::parse("read"), Ok(Mode::Read));
    assert_eq!(EnumTraits::<Mode>::repr_to_string(2), Some("write"));
}

#[test]
fn concurrent_readers() {
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    assert_eq!(EnumTraits::<TestEnum>::parse("state3"), Ok(TestEnum::state3));
                    assert_eq!(enum_to_string(CustomEnum::Field1), Some("field1"));
                }
            });
        }
    });
    assert!(std::ptr::eq(
        TestEnum::lookup_table(),
        TestEnum::lookup_table()
    ));
}

#[test]
fn with_crate_path() {
    use rich_enum as mycrate;

    declare_enum!(Renamed, a, (b, 5) @ mycrate);

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Existing {
        X = 3,
    }
    register_enum!(Existing: i64 { "x" => Existing::X } @ mycrate);

    assert_eq!(mycrate::enum_to_string(Renamed::b), Some("b"));
    assert_eq!(mycrate::EnumTraits::<Existing>::repr_to_string(3i64), Some("x"));
}
