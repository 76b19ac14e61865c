use ccalc::{
    AngleUnit, Config, Value, calculate,
    error::{ErrorKind, LexError},
    evaluate,
};

fn expect_int(src: &str, expected: i64) {
    expect_int_with(src, &Config::default(), expected);
}

fn expect_int_with(src: &str, config: &Config, expected: i64) {
    match evaluate(src, config) {
        Ok(Value::Integer(n)) => assert_eq!(n, expected, "wrong result for `{src}`"),
        Ok(other) => panic!("`{src}` produced {other:?}, expected Integer({expected})"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn expect_float(src: &str, expected: f64) {
    expect_float_with(src, &Config::default(), expected);
}

fn expect_float_with(src: &str, config: &Config, expected: f64) {
    match evaluate(src, config) {
        Ok(Value::Float(x)) => {
            let tolerance = 1e-12 * expected.abs().max(1.0);
            assert!((x - expected).abs() <= tolerance,
                    "`{src}` produced {x}, expected {expected}");
        },
        Ok(other) => panic!("`{src}` produced {other:?}, expected Float({expected})"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn expect_output(src: &str, config: &Config, expected: &str) {
    match calculate(src, config) {
        Ok(text) => assert_eq!(text, expected, "wrong output for `{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn expect_error(src: &str, message: &str) {
    expect_error_with(src, &Config::default(), message);
}

fn expect_error_with(src: &str, config: &Config, message: &str) {
    match calculate(src, config) {
        Ok(text) => panic!("`{src}` succeeded with {text} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "wrong error for `{src}`"),
    }
}

fn expect_kind(src: &str, kind: ErrorKind) {
    match evaluate(src, &Config::default()) {
        Ok(value) => panic!("`{src}` succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error kind for `{src}`: {e}"),
    }
}

fn hex() -> Config {
    Config { radix: 16, ..Config::default() }
}

fn binary() -> Config {
    Config { radix: 2, ..Config::default() }
}

fn degrees() -> Config {
    Config { angle_unit: AngleUnit::Degrees,
             ..Config::default() }
}

#[test]
fn basic_arithmetic() {
    expect_int("1 + 2", 3);
    expect_int("7 * 9", 63);
    expect_int("8 - 5", 3);
    expect_int("10 - 4 - 3", 3);
    expect_int("  42\t", 42);
    expect_float("1.5 + 1", 2.5);
    expect_float("0.1 * 3", 0.1 * 3.0);
}

#[test]
fn operator_precedence() {
    expect_int("1 + 2 * 3", 7);
    expect_int("(1 + 2) * 3", 9);
    expect_int("2 * 3 % 4", 2);
    expect_int("1 << 2 + 1", 8);
    expect_int("1 | 2 ^ 3 & 1", 3);
    expect_int("3 == 3 & 1", 1);
    expect_int("1 + 1 == 2 && 3 > 2", 1);
    expect_int("1 || 0 && 0", 1);
    expect_int("6 & 3 | 8", 10);
    expect_int("-2 * -3", 6);
    expect_int("!0 + 1", 2);
}

#[test]
fn division_promotes_unless_exact() {
    expect_int("4 / 2", 2);
    expect_int("-12 / 4", -3);
    expect_float("5 / 3", 5.0 / 3.0);
    expect_float("-7 / 2", -3.5);
    expect_float("1.0 / 4", 0.25);
    expect_output("5 / 3", &Config::default(), "1.666667");
    expect_output("4 / 2", &Config::default(), "2");
}

#[test]
fn integer_division_and_modulo() {
    expect_int("7 // 2", 3);
    expect_int("-7 // 2", -3);
    expect_int("7 % 3", 1);
    expect_int("-7 % 3", -1);
    expect_int("7 % -3", 1);
    expect_error("7.5 // 2", "integer division operator '//' requires integer operands");
    expect_error("7 % 2.0", "modulo operator '%' requires integer operands");
}

#[test]
fn division_by_zero() {
    expect_error("13 / 0", "division by zero");
    expect_error("13 // 0", "division by zero");
    expect_error("13.0 / 0", "division by zero");
    expect_error("13 % 0", "mod by zero");
    expect_kind("13 / 0", ErrorKind::Arithmetic);
    expect_kind("13 % 0", ErrorKind::Arithmetic);
}

#[test]
fn exponentiation_is_right_associative() {
    expect_int("2**2**2**2", 1 << 16);
    expect_int("2**3**2", 512);
    expect_int("(2**3)**2", 64);
    expect_int("(-13)**2", 169);
    expect_int("-13**2", -169);
    expect_int("2**62", 1 << 62);
    expect_int("0**0", 1);
    expect_int("(-2)**3", -8);
    expect_float("2**-1", 0.5);
    expect_float("4**0.5", 2.0);
    expect_float("2.0**3", 8.0);
    expect_error("2**63", "integer overflow");
}

#[test]
fn caret_operator() {
    expect_int("6 ^ 3", 5);

    let caret = Config { caret_exp: true,
                         ..Config::default() };
    expect_int_with("2 ^ 10", &caret, 1024);
    expect_int_with("2 ^ 3 ^ 2", &caret, 512);
    expect_int_with("-2 ^ 2", &caret, -4);
    expect_float_with("2 ^ 0.5", &caret, std::f64::consts::SQRT_2);
}

#[test]
fn relational_chains_are_left_associative() {
    expect_int("4 < 6 < 8", 1);
    expect_int("8 > 6 > 4", 0);
    expect_int("3 <= 3", 1);
    expect_int("3 >= 4", 0);
    expect_int("2 == 2.0", 1);
    expect_int("1 != 1.5", 1);
    expect_int("0.5 < 1", 1);
}

#[test]
fn logical_operators() {
    expect_int("!0", 1);
    expect_int("!2.5", 0);
    expect_int("!!7", 1);
    expect_int("0.5 && 2", 1);
    expect_int("0 || 0.0", 0);
    expect_int("0 || -3", 1);
    expect_int("1 && 0", 0);
}

#[test]
fn bitwise_operators() {
    expect_int("~0", -1);
    expect_int("~5", -6);
    expect_int("12 & 10", 8);
    expect_int("12 | 10", 14);
    expect_int("12 ^ 10", 6);
    expect_int("1 << 10", 1024);
    expect_int("1 << 63", i64::MIN);
    expect_int("-16 >> 2", -4);
    expect_int("255 >> 4", 15);
}

#[test]
fn bitwise_operators_reject_floats() {
    expect_error("1.5 & 1", "bitwise AND operator '&' requires integer operands");
    expect_error("1 | 2.0", "bitwise OR operator '|' requires integer operands");
    expect_error("2.0 ^ 1", "bitwise XOR operator '^' requires integer operands");
    expect_error("1 << 1.0", "bit shift operator '<<' requires integer operands");
    expect_error("8.0 >> 1", "bit shift operator '>>' requires integer operands");
    expect_error("~1.0", "bitwise NOT operator '~' requires an integer operand");
    expect_kind("4.0 & 4", ErrorKind::Type);
}

#[test]
fn shift_count_out_of_range() {
    expect_error("1 << 64", "shift count 64 is out of range");
    expect_error("1 >> -1", "shift count -1 is out of range");
    expect_kind("1 << 100", ErrorKind::Arithmetic);
}

#[test]
fn integer_overflow_is_reported() {
    expect_error("9223372036854775807 + 1", "integer overflow");
    expect_error("LONG_MIN - 1", "integer overflow");
    expect_error("LONG_MAX * 2", "integer overflow");
    expect_error("-LONG_MIN", "integer overflow");
    expect_error("LONG_MIN // -1", "integer overflow");
    expect_error("abs(LONG_MIN)", "integer overflow");
    expect_int("LONG_MAX", i64::MAX);
}

#[test]
fn conditional_operator() {
    expect_int("1 ? 2 : 3", 2);
    expect_int("0 ? 2 : 3", 3);
    expect_int("0.0 ? 2 : 3", 3);
    expect_int("0 ? 2 : 0 ? 4 : 5", 5);
    expect_int("1 ? 0 ? 6 : 7 : 8", 7);
    expect_int("1 ? 2, 3 : 4", 3);
    expect_int("(1 ? 2 : 3) + 10", 12);
    expect_error("1 ? 2", "unexpected end of input");
    expect_error("1 ? 2 3", "unexpected token '3'");
}

#[test]
fn conditional_evaluates_both_branches() {
    expect_error("1 ? 0 : sqrt(-1)", "domain error in function 'sqrt'");
    expect_error("0 ? 1 / 0 : 2", "division by zero");
}

#[test]
fn every_operation_reaches_the_token_lookahead() {
    expect_int("(1 + 2) * max(3, 4) ? 5 : 6", 5);
    expect_error("1 + 2 $", "unexpected character '$'");
}

#[test]
fn comma_operator() {
    expect_int("1, 2, 3", 3);
    expect_int("(1, 2) + 3", 5);
    expect_float("7, 2.5", 2.5);
    expect_error("1 / 0, 2", "division by zero");
}

#[test]
fn integer_literals() {
    expect_int("0", 0);
    expect_int("00", 0);
    expect_int("0b11011011", 219);
    expect_int("0B101", 5);
    expect_int("0xDB", 219);
    expect_int("0XdB", 219);
    expect_int("035", 29);
    expect_int("9223372036854775807", i64::MAX);
    expect_int("0x7fffffffffffffff", i64::MAX);
}

#[test]
fn float_literals() {
    expect_float(".5", 0.5);
    expect_float("1.", 1.0);
    expect_float("3.25", 3.25);
    expect_float("2.5e-3", 0.0025);
    expect_float("1.5E+2", 150.0);
    expect_float("1.e3", 1000.0);
    expect_float("0.1", 0.1);
    expect_float("09.5", 9.5);
}

#[test]
fn float_literal_exponents_saturate() {
    expect_output("1.0e999999999999", &Config::default(), "inf");
    expect_output("1.0e-999999999999", &Config::default(), "0.000000");
    expect_float("1.5e", 1.5);
    expect_float(".", 0.0);
    assert_eq!(LexError::MalformedConstant.to_string(), "malformed floating-point constant");
}

#[test]
fn malformed_literals() {
    expect_error("02ff", "unexpected digit 'f' in octal constant");
    expect_error("08", "unexpected digit '8' in octal constant");
    expect_error("0b102", "unexpected digit '2' in binary constant");
    expect_error("12a", "unexpected digit 'a' in constant");
    expect_error("1e5", "unexpected digit 'e' in constant");
    expect_error("0x1.5", "hexadecimal constant must be an integer");
    expect_error("0b1.1", "binary constant must be an integer");
    expect_error("9223372036854775808", "integer constant is too large");
    expect_error("0x10000000000000000", "integer constant is too large");
    expect_kind("02ff", ErrorKind::Lexical);
}

#[test]
fn lexical_errors() {
    expect_error("3 $ 4", "unexpected character '$'");
    expect_error("1 = 2", "assignment operator '=' is not supported");
    expect_error("x = 1", "assignment operator '=' is not supported");
    expect_kind("#", ErrorKind::Lexical);
    expect_int("1 == 1", 1);
}

#[test]
fn syntax_errors() {
    expect_error("4 * (1 + 2", "unmatched parenthesis '('");
    expect_error("3 + 4)", "unmatched parenthesis ')'");
    expect_error("sqrt(4", "unmatched parenthesis '('");
    expect_error("3 +", "unexpected end of input");
    expect_error("", "unexpected end of input");
    expect_error("3 4", "unexpected token '4'");
    expect_error("* 3", "unexpected token '*'");
    expect_error("()", "unexpected token ')'");
    expect_error("1 ? : 2", "unexpected token ':'");
    expect_kind("(", ErrorKind::Syntax);
}

#[test]
fn constants() {
    expect_float("PI", std::f64::consts::PI);
    expect_float("E", std::f64::consts::E);
    expect_float("PHI", 1.618_033_988_749_895);
    expect_int("RAND_MAX", 2_147_483_647);
    expect_int("INT_MAX + 1", 2_147_483_648);
    expect_int("INT_MIN", -2_147_483_648);
    expect_int("CHAR_MIN", -128);
    expect_int("UCHAR_MAX", 255);
    expect_int("USHRT_MAX", 65535);
    expect_int("SHRT_MIN", -32768);
    expect_int("DBL_DIG", 15);
    expect_int("DBL_MANT_DIG", 53);
    expect_int("DBL_MAX_EXP", 1024);
    expect_int("DBL_MIN_EXP", -1021);
    expect_int("FLT_DIG", 6);
    expect_int("FLT_RADIX", 2);
    expect_float("DBL_EPSILON", f64::EPSILON);
    expect_float("FLT_MAX", f64::from(f32::MAX));
    expect_int("LONG_MIN", i64::MIN);
}

#[test]
fn unknown_names() {
    expect_error("FOO", "unknown identifier 'FOO'");
    expect_error("pi", "unknown identifier 'pi'");
    expect_error("foo(1)", "unknown function identifier 'foo'");
    expect_error("PI(1)", "unknown function identifier 'PI'");
    expect_error("foo(1 / 0)", "division by zero");
    expect_kind("FOO", ErrorKind::UnknownIdentifier);
    expect_kind("foo()", ErrorKind::UnknownFunction);
}

#[test]
fn long_identifiers_are_truncated() {
    let name = "A".repeat(40);
    expect_error(&name, &format!("unknown identifier '{}'", "A".repeat(32)));
}

#[test]
fn function_arity() {
    expect_error("sin(13, 4)", "function 'sin' does not take 2 arguments");
    expect_error("rand(1)", "function 'rand' does not take 1 argument");
    expect_error("atan2(1)", "function 'atan2' requires more than 1 argument");
    expect_error("sin()", "function 'sin' requires more than 0 arguments");
    expect_kind("sin(13, 4)", ErrorKind::Arity);

    let sixteen = vec!["1"; 16].join(", ");
    expect_error(&format!("max({sixteen})"), "function 'max' does not take 16 arguments");

    let seventeen = vec!["1"; 17].join(", ");
    expect_error(&format!("max({seventeen})"), "too many arguments to function 'max'");
    expect_kind(&format!("max({seventeen})"), ErrorKind::Arity);
}

#[test]
fn function_arguments_are_conditionals() {
    expect_int("max((1, 5), 3)", 5);
    expect_int("max(1 ? 2 : 3, 1)", 2);
    expect_int("min(max(1, 2), 3)", 2);
}

#[test]
fn domain_errors() {
    expect_error("asin(1.5)", "domain error in function 'asin'");
    expect_error("acos(-1.5)", "domain error in function 'acos'");
    expect_error("log(-13)", "domain error in function 'log'");
    expect_error("log(0)", "domain error in function 'log'");
    expect_error("sqrt(-1)", "domain error in function 'sqrt'");
    expect_error("exp(1000)", "domain error in function 'exp'");
    expect_kind("asin(2)", ErrorKind::Domain);
}

#[test]
fn roots_powers_and_logarithms() {
    expect_float("sqrt(16)", 4.0);
    expect_float("cbrt(27)", 3.0);
    expect_float("hypot(3, 4)", 5.0);
    expect_float("exp(0)", 1.0);
    expect_float("log(E)", 1.0);
    expect_float("log10(1000)", 3.0);
    expect_float("log2(8)", 3.0);
    expect_float("expm1(0)", 0.0);
    expect_float("log1p(0)", 0.0);
    expect_int("pow(2, 10)", 1024);
    expect_float("pow(2, -2)", 0.25);
    expect_int("exp2(10)", 1024);
    expect_float("exp2(0.5)", std::f64::consts::SQRT_2);
}

#[test]
fn rounding_functions() {
    expect_int("floor(2.7)", 2);
    expect_int("floor(-2.2)", -3);
    expect_int("ceil(2.1)", 3);
    expect_int("trunc(-2.7)", -2);
    expect_int("round(2.5)", 3);
    expect_int("round(-2.5)", -3);
    expect_int("floor(7)", 7);
    expect_float("floor(1.5e300)", 1.5e300);
}

#[test]
fn abs_min_max_keep_integers() {
    expect_int("abs(-5)", 5);
    expect_float("abs(-2.5)", 2.5);
    expect_int("max(3, 7)", 7);
    expect_float("max(3, 7.5)", 7.5);
    expect_int("min(-1, 2)", -1);
    expect_float("min(-1.5, 2)", -1.5);
}

#[test]
fn remainders() {
    expect_int("fmod(7, 3)", 1);
    expect_int("fmod(-7, 3)", -1);
    expect_error("fmod(7, 0)", "mod by zero");
    expect_float("fmod(7.5, 2)", 1.5);
    expect_int("remainder(10, 4)", 2);
    expect_int("remainder(10, 3)", 1);
    expect_float("remainder(7.5, 2)", -0.5);
}

#[test]
fn special_functions() {
    expect_float("erf(0)", 0.0);
    expect_float("erfc(0)", 1.0);
    expect_float("tgamma(5)", 24.0);
    expect_float("lgamma(1)", 0.0);
    expect_float("nextafter(1, 2)", 1.0 + f64::EPSILON);
    expect_float("sinh(0)", 0.0);
    expect_float("cosh(0)", 1.0);
    expect_float("tanh(0)", 0.0);
    expect_float("asinh(0)", 0.0);
    expect_float("acosh(1)", 0.0);
    expect_float("atanh(0)", 0.0);
}

#[test]
fn random_numbers_stay_in_range() {
    for _ in 0..32 {
        expect_int("rand() >= 0 && rand() <= RAND_MAX", 1);
    }
}

#[test]
fn trigonometry_in_radians() {
    expect_float("sin(0)", 0.0);
    expect_float("cos(PI)", -1.0);
    expect_float("tan(PI / 4)", 1.0);
    expect_float("asin(1)", std::f64::consts::FRAC_PI_2);
    expect_float("acos(1)", 0.0);
    expect_float("atan(1)", std::f64::consts::FRAC_PI_4);
    expect_float("atan2(1, 1)", std::f64::consts::FRAC_PI_4);
}

#[test]
fn trigonometry_in_degrees() {
    let config = degrees();
    expect_float_with("sin(90)", &config, 1.0);
    expect_float_with("cos(180)", &config, -1.0);
    expect_float_with("tan(45)", &config, 1.0);
    expect_float_with("asin(1)", &config, 90.0);
    expect_float_with("acos(0)", &config, 90.0);
    expect_float_with("atan(1)", &config, 45.0);
    expect_float_with("atan2(1, 1)", &config, 45.0);
    expect_float_with("sinh(0)", &config, 0.0);
}

#[test]
fn integer_output_in_other_radices() {
    let upper_hex = Config { uppercase: true,
                             ..hex() };
    expect_output("42", &upper_hex, "0x2A");
    expect_output("42", &hex(), "0x2a");
    expect_output("42", &binary(), "0b101010");
    expect_output("-42", &binary(), "-0b101010");
    expect_output("0", &hex(), "0");
    expect_output("0b11011011", &binary(), "0b11011011");
    expect_output("8", &Config { radix: 8, ..Config::default() }, "010");
    expect_output("35", &Config { radix: 36, ..Config::default() }, "35");
    expect_output("1000", &Config { radix: 20, ..Config::default() }, "2:10:0");
    expect_output("100", &Config { radix: 3, ..Config::default() }, "10201");
}

#[test]
fn integer_output_grouping() {
    expect_output("256", &binary(), "0b1 00000000");
    expect_output("0x12345678", &hex(), "0x1234 5678");
    expect_output("LONG_MIN", &hex(), "-0x8000 0000 0000 0000");
    expect_output("0x12345678",
                  &Config { grouping: Some(0),
                            ..hex() },
                  "0x12345678");
    expect_output("1234567",
                  &Config { grouping: Some(3),
                            ..Config::default() },
                  "1 234 567");
    expect_output("1000",
                  &Config { radix: 20,
                            grouping: Some(2),
                            ..Config::default() },
                  "2: 10:0");
    expect_output("1234567", &Config::default(), "1234567");
}

#[test]
fn float_output() {
    let config = Config::default();
    expect_output("2.5", &config, "2.500000");
    expect_output("-0.5", &config, "-0.500000");
    expect_output("0.0", &config, "0.000000");
    expect_output("PI", &Config { precision: 2, ..config.clone() }, "3.14");
    expect_output("1.0e10", &config, "1.000000e+10");
    expect_output("1.5e-7", &config, "1.500000e-07");
    expect_output("1234.5",
                  &Config { precision: 2,
                            scientific: true,
                            ..config.clone() },
                  "1.23e+03");
    expect_output("2.5", &hex(), "2.500000");
}

#[test]
fn float_output_grouping_touches_integer_part_only() {
    let config = Config { precision: 3,
                          grouping: Some(3),
                          ..Config::default() };
    expect_output("1234567.891", &config, "1 234 567.891");
    expect_output("-1234.5", &config, "-1 234.500");
    expect_output("0.123456", &config, "0.123");
}

#[test]
fn non_finite_output() {
    let config = Config::default();
    expect_output("DBL_MAX * 2", &config, "inf");
    expect_output("-DBL_MAX * 2", &config, "-inf");
    expect_output("DBL_MAX * 2 - DBL_MAX * 2", &config, "nan");
}

#[test]
fn boolean_output() {
    let config = Config { boolean: true,
                          ..Config::default() };
    expect_output("5 > 3", &config, "true");
    expect_output("0.0", &config, "false");
    expect_output("-7", &config, "true");

    let upper = Config { uppercase: true,
                         ..config };
    expect_output("1", &upper, "TRUE");
    expect_output("0", &upper, "FALSE");
}

#[test]
fn configuration_errors() {
    let bad_radix = Config { radix: 1, ..Config::default() };
    expect_error_with("1", &bad_radix, "radix cannot be less than 2");

    let bad_precision = Config { precision: -1,
                                 ..Config::default() };
    expect_error_with("1", &bad_precision, "precision cannot be less than 0");
    expect_error_with("1 / 0", &bad_precision, "precision cannot be less than 0");

    match calculate("1", &bad_radix) {
        Err(e) => assert_eq!(e.kind(), ErrorKind::Config),
        Ok(text) => panic!("expected a configuration error, got {text}"),
    }
}

#[test]
fn evaluation_ignores_output_settings() {
    let bad_radix = Config { radix: 0, ..Config::default() };
    expect_int_with("2 + 2", &bad_radix, 4);
}
