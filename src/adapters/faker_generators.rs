//! Registry of faker-style generators addressable as `namespace.method`.
//!
//! Names follow the faker.js conventions commonly found in `x-faker`
//! extensions (`name.firstName`, `internet.email`, `datatype.number`, ...).
//! Text comes from the `fake` crate in the provider's locale; numbers, dates
//! and identifiers from `rand`, `chrono` and `uuid`.

use chrono::{Duration, SecondsFormat, Utc};
use fake::faker::{address, company, creditcard, currency, internet, lorem, name, phone_number};
use fake::locales::{EN, FR_FR, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

use crate::domain::Locale;

/// A generator receives the provider locale and the decoded JSON arguments.
/// `Err` carries a human readable reason the arguments were rejected.
pub type Generator = fn(Locale, &[Value]) -> Result<Value, String>;

macro_rules! fake_in {
    ($locale:expr, $($faker:ident)::+ $(, $arg:expr)* => $out:ty) => {
        match $locale {
            Locale::En => $($faker)::+(EN $(, $arg)*).fake::<$out>(),
            Locale::FrFr => $($faker)::+(FR_FR $(, $arg)*).fake::<$out>(),
            Locale::PtBr => $($faker)::+(PT_BR $(, $arg)*).fake::<$out>(),
            Locale::ZhCn => $($faker)::+(ZH_CN $(, $arg)*).fake::<$out>(),
            Locale::ZhTw => $($faker)::+(ZH_TW $(, $arg)*).fake::<$out>(),
        }
    };
}

/// Generators that take no arguments and map onto a single `fake` type
macro_rules! text_generators {
    ($($fn_name:ident => $($faker:ident)::+;)*) => {
        $(
            fn $fn_name(locale: Locale, _args: &[Value]) -> Result<Value, String> {
                Ok(Value::String(fake_in!(locale, $($faker)::+ => String)))
            }
        )*
    };
}

text_generators! {
    first_name => name::raw::FirstName;
    last_name => name::raw::LastName;
    full_name => name::raw::Name;
    name_prefix => name::raw::Title;
    name_suffix => name::raw::Suffix;
    job_title => company::raw::Profession;

    free_email => internet::raw::FreeEmail;
    safe_email => internet::raw::SafeEmail;
    user_name => internet::raw::Username;
    domain_suffix => internet::raw::DomainSuffix;
    ipv4 => internet::raw::IPv4;
    ipv6 => internet::raw::IPv6;
    mac_address => internet::raw::MACAddress;
    user_agent => internet::raw::UserAgent;

    city => address::raw::CityName;
    city_prefix => address::raw::CityPrefix;
    city_suffix => address::raw::CitySuffix;
    street_name => address::raw::StreetName;
    street_suffix => address::raw::StreetSuffix;
    secondary_address => address::raw::SecondaryAddress;
    building_number => address::raw::BuildingNumber;
    zip_code => address::raw::ZipCode;
    country => address::raw::CountryName;
    country_code => address::raw::CountryCode;
    state => address::raw::StateName;
    state_abbr => address::raw::StateAbbr;
    time_zone => address::raw::TimeZone;

    phone => phone_number::raw::PhoneNumber;
    cell_number => phone_number::raw::CellNumber;

    word => lorem::raw::Word;

    company_name => company::raw::CompanyName;
    company_suffix => company::raw::CompanySuffix;
    bs => company::raw::Bs;
    bs_noun => company::raw::BsNoun;
    bs_verb => company::raw::BsVerb;
    bs_adjective => company::raw::BsAdj;
    industry => company::raw::Industry;

    currency_code => currency::raw::CurrencyCode;
    currency_name => currency::raw::CurrencyName;
    currency_symbol => currency::raw::CurrencySymbol;
    credit_card_number => creditcard::raw::CreditCardNumber;
}

const GENERATORS: &[(&str, Generator)] = &[
    ("name.firstName", first_name),
    ("name.lastName", last_name),
    ("name.findName", full_name),
    ("name.prefix", name_prefix),
    ("name.suffix", name_suffix),
    ("name.jobTitle", job_title),
    ("internet.email", free_email),
    ("internet.exampleEmail", safe_email),
    ("internet.userName", user_name),
    ("internet.domainSuffix", domain_suffix),
    ("internet.domainName", domain_name),
    ("internet.url", url),
    ("internet.ip", ipv4),
    ("internet.ipv6", ipv6),
    ("internet.mac", mac_address),
    ("internet.userAgent", user_agent),
    ("internet.password", password),
    ("address.city", city),
    ("address.cityPrefix", city_prefix),
    ("address.citySuffix", city_suffix),
    ("address.streetName", street_name),
    ("address.streetSuffix", street_suffix),
    ("address.streetAddress", street_address),
    ("address.secondaryAddress", secondary_address),
    ("address.buildingNumber", building_number),
    ("address.zipCode", zip_code),
    ("address.country", country),
    ("address.countryCode", country_code),
    ("address.state", state),
    ("address.stateAbbr", state_abbr),
    ("address.timeZone", time_zone),
    ("address.latitude", latitude),
    ("address.longitude", longitude),
    ("phone.phoneNumber", phone),
    ("phone.cellNumber", cell_number),
    ("lorem.word", word),
    ("lorem.words", words),
    ("lorem.sentence", sentence),
    ("lorem.sentences", sentences),
    ("lorem.paragraph", paragraph),
    ("lorem.paragraphs", paragraphs),
    ("company.companyName", company_name),
    ("company.companySuffix", company_suffix),
    ("company.catchPhrase", catch_phrase),
    ("company.bs", bs),
    ("company.bsNoun", bs_noun),
    ("company.bsBuzz", bs_verb),
    ("company.bsAdjective", bs_adjective),
    ("company.industry", industry),
    ("finance.currencyCode", currency_code),
    ("finance.currencyName", currency_name),
    ("finance.currencySymbol", currency_symbol),
    ("finance.creditCardNumber", credit_card_number),
    ("finance.amount", amount),
    ("datatype.number", number),
    ("datatype.float", float),
    ("datatype.boolean", boolean),
    ("datatype.uuid", uuid),
    ("datatype.string", alphanumeric_string),
    ("random.number", number),
    ("random.float", float),
    ("random.boolean", boolean),
    ("random.uuid", uuid),
    ("random.alphaNumeric", alphanumeric),
    ("random.arrayElement", array_element),
    ("random.word", word),
    ("random.words", words),
    ("date.past", date_past),
    ("date.future", date_future),
    ("date.recent", date_recent),
    ("date.soon", date_soon),
];

/// Look up the generator registered as `namespace.method`.
pub fn lookup(namespace: &str, method: &str) -> Option<Generator> {
    GENERATORS
        .iter()
        .find(|(key, _)| {
            key.split_once('.')
                .map_or(false, |(ns, m)| ns == namespace && m == method)
        })
        .map(|(_, generator)| *generator)
}

/// Every registered `namespace.method`, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    GENERATORS.iter().map(|(key, _)| *key)
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

/// Upper bound for word, sentence, paragraph and character counts
const MAX_TEXT_UNITS: usize = 1_000;
/// Upper bound for the fraction digits of `finance.amount`
const MAX_DECIMALS: usize = 20;

/// Optional non-negative integer argument at `index`
fn count_arg(args: &[Value], index: usize, default: usize) -> Result<usize, String> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| format!("argument {} must be a non-negative integer, got {}", index + 1, value)),
    }
}

/// Like [`count_arg`] but rejects counts above `limit`
fn bounded_count(
    args: &[Value],
    index: usize,
    default: usize,
    limit: usize,
) -> Result<usize, String> {
    let count = count_arg(args, index, default)?;
    if count > limit {
        return Err(format!("argument {} must be at most {}, got {}", index + 1, limit, count));
    }
    Ok(count)
}

/// `gen_range` needs a finite span
fn check_span(min: f64, max: f64) -> Result<(), String> {
    if min > max {
        return Err(format!("min ({}) is greater than max ({})", min, max));
    }
    if !(max - min).is_finite() {
        return Err(format!("range {}..{} is too wide", min, max));
    }
    Ok(())
}

fn number_field(options: &serde_json::Map<String, Value>, field: &str, default: f64) -> Result<f64, String> {
    match options.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| format!("'{}' must be a number, got {}", field, value)),
    }
}

#[derive(Debug, Clone, Copy)]
struct NumberOptions {
    min: f64,
    max: f64,
    precision: f64,
}

/// `(max)` or `({"min", "max", "precision"})`
fn number_options(args: &[Value], default_precision: f64) -> Result<NumberOptions, String> {
    let mut options = NumberOptions {
        min: 0.0,
        max: 99999.0,
        precision: default_precision,
    };

    match args.first() {
        None | Some(Value::Null) => {}
        Some(Value::Number(max)) => {
            options.max = max.as_f64().unwrap_or(options.max);
        }
        Some(Value::Object(fields)) => {
            options.min = number_field(fields, "min", options.min)?;
            options.max = number_field(fields, "max", options.max)?;
            options.precision = number_field(fields, "precision", options.precision)?;
        }
        Some(other) => return Err(format!("expected a number or an options object, got {}", other)),
    }

    check_span(options.min, options.max)?;
    if !(options.precision > 0.0) {
        return Err(format!("precision must be positive, got {}", options.precision));
    }

    Ok(options)
}

fn decimals(precision: f64) -> i32 {
    (-precision.log10()).ceil().max(0.0) as i32
}

/// Pick a multiple of `precision` within `[min, max]`
fn pick_number(options: NumberOptions) -> Value {
    let steps = ((options.max - options.min) / options.precision).floor() as u64;
    let step = rand::thread_rng().gen_range(0..=steps);
    let value = options.min + step as f64 * options.precision;

    let places = decimals(options.precision);
    if places == 0 && value.fract() == 0.0 {
        json!(value as i64)
    } else {
        let factor = 10f64.powi(places);
        json!((value * factor).round() / factor)
    }
}

// ---------------------------------------------------------------------------
// Generators with arguments or composed output
// ---------------------------------------------------------------------------

fn domain_name(_locale: Locale, _args: &[Value]) -> Result<Value, String> {
    let label = lorem::raw::Word(EN).fake::<String>().to_lowercase();
    let suffix = internet::raw::DomainSuffix(EN).fake::<String>();
    Ok(json!(format!("{}.{}", label, suffix)))
}

fn url(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let domain = domain_name(locale, args)?;
    Ok(json!(format!("https://{}", domain.as_str().unwrap_or_default())))
}

fn password(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let len = bounded_count(args, 0, 15, MAX_TEXT_UNITS)?.max(1);
    Ok(json!(fake_in!(locale, internet::raw::Password, len..len + 1 => String)))
}

fn street_address(locale: Locale, _args: &[Value]) -> Result<Value, String> {
    let number = fake_in!(locale, address::raw::BuildingNumber => String);
    let street = fake_in!(locale, address::raw::StreetName => String);
    Ok(json!(format!("{} {}", number, street)))
}

fn coordinate(limit: f64) -> Result<Value, String> {
    check_span(-limit, limit)?;
    let value: f64 = rand::thread_rng().gen_range(-limit..=limit);
    Ok(json!(format!("{:.4}", value)))
}

fn latitude(_locale: Locale, _args: &[Value]) -> Result<Value, String> {
    coordinate(90.0)
}

fn longitude(_locale: Locale, _args: &[Value]) -> Result<Value, String> {
    coordinate(180.0)
}

fn words(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let count = bounded_count(args, 0, 3, MAX_TEXT_UNITS)?;
    let words = fake_in!(locale, lorem::raw::Words, count..count + 1 => Vec<String>);
    Ok(json!(words.join(" ")))
}

fn sentence(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let range = match bounded_count(args, 0, 0, MAX_TEXT_UNITS)? {
        0 => 3..11,
        count => count..count + 1,
    };
    Ok(json!(fake_in!(locale, lorem::raw::Sentence, range => String)))
}

fn sentences(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let count = bounded_count(args, 0, 3, MAX_TEXT_UNITS)?;
    let sentences = fake_in!(locale, lorem::raw::Sentences, count..count + 1 => Vec<String>);
    Ok(json!(sentences.join(" ")))
}

fn paragraph(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let count = bounded_count(args, 0, 3, MAX_TEXT_UNITS)?;
    Ok(json!(fake_in!(locale, lorem::raw::Paragraph, count..count + 1 => String)))
}

fn paragraphs(locale: Locale, args: &[Value]) -> Result<Value, String> {
    let count = bounded_count(args, 0, 3, MAX_TEXT_UNITS)?;
    let paragraphs = fake_in!(locale, lorem::raw::Paragraphs, count..count + 1 => Vec<String>);
    Ok(json!(paragraphs.join("\n")))
}

fn catch_phrase(locale: Locale, _args: &[Value]) -> Result<Value, String> {
    let adjective = fake_in!(locale, company::raw::Buzzword => String);
    let descriptor = fake_in!(locale, company::raw::BuzzwordMiddle => String);
    let noun = fake_in!(locale, company::raw::BuzzwordTail => String);
    Ok(json!(format!("{} {} {}", adjective, descriptor, noun)))
}

/// `(min, max, dec)`, returned as a fixed-point string
fn amount(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    let arg = |index: usize, default: f64| match args.get(index) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| format!("argument {} must be a number, got {}", index + 1, value)),
    };
    let min = arg(0, 0.0)?;
    let max = arg(1, 1000.0)?;
    let dec = bounded_count(args, 2, 2, MAX_DECIMALS)?;
    check_span(min, max)?;

    let value: f64 = rand::thread_rng().gen_range(min..=max);
    Ok(json!(format!("{:.*}", dec, value)))
}

fn number(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(pick_number(number_options(args, 1.0)?))
}

fn float(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(pick_number(number_options(args, 0.01)?))
}

fn boolean(_locale: Locale, _args: &[Value]) -> Result<Value, String> {
    Ok(json!(rand::thread_rng().gen_bool(0.5)))
}

fn uuid(_locale: Locale, _args: &[Value]) -> Result<Value, String> {
    Ok(json!(uuid::Uuid::new_v4().to_string()))
}

fn random_chars(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn alphanumeric(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(json!(random_chars(bounded_count(args, 0, 1, MAX_TEXT_UNITS)?)))
}

fn alphanumeric_string(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(json!(random_chars(bounded_count(args, 0, 10, MAX_TEXT_UNITS)?)))
}

fn array_element(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    let default = [json!("a"), json!("b"), json!("c")];
    let candidates = match args.first() {
        None | Some(Value::Null) => &default[..],
        Some(Value::Array(items)) if !items.is_empty() => items.as_slice(),
        Some(other) => return Err(format!("expected a non-empty array, got {}", other)),
    };

    Ok(candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or(Value::Null))
}

fn timestamp(offset: Duration) -> Value {
    json!((Utc::now() + offset).to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Random offset of up to `count * unit_seconds`, at least one second.
/// `count` is clamped to `1..=MAX_DATE_UNITS`.
fn random_offset(count: usize, unit_seconds: i64) -> Duration {
    let span = count.clamp(1, MAX_DATE_UNITS) as i64 * unit_seconds;
    Duration::seconds(rand::thread_rng().gen_range(1..=span))
}

const DAY_SECONDS: i64 = 24 * 60 * 60;
const YEAR_SECONDS: i64 = 365 * DAY_SECONDS;
const MAX_DATE_UNITS: usize = 10_000;

fn date_past(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(timestamp(-random_offset(count_arg(args, 0, 1)?, YEAR_SECONDS)))
}

fn date_future(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(timestamp(random_offset(count_arg(args, 0, 1)?, YEAR_SECONDS)))
}

fn date_recent(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(timestamp(-random_offset(count_arg(args, 0, 1)?, DAY_SECONDS)))
}

fn date_soon(_locale: Locale, args: &[Value]) -> Result<Value, String> {
    Ok(timestamp(random_offset(count_arg(args, 0, 1)?, DAY_SECONDS)))
}
