//! Built-in feature catalog, grouped by ECMAScript edition.
//!
//! Each declaration pairs a syntactic lint rule with the compatibility
//! database paths that must all be supported for the rule to stay silent.

use super::edition::Edition;
use super::edition::Edition::*;
use super::{FeatureSpec, RuleOptions};

/// Polyfill identifiers accepted in configuration.
pub const KNOWN_POLYFILLS: &[&str] = &[
    "globalThis",
    "{Array,String,TypedArray}.prototype.at",
    "{Array,TypedArray}.prototype.findLast",
    "{Array,TypedArray}.prototype.toReversed",
    "{Array,TypedArray}.prototype.toSorted",
    "{Array,TypedArray}.prototype.with",
    "Array.prototype.flat",
    "Array.prototype.flatMap",
    "Array.prototype.includes",
    "Array.prototype.toSpliced",
    "Error.cause",
    "Object.entries",
    "Object.fromEntries",
    "Object.getOwnPropertyDescriptors",
    "Object.hasOwn",
    "Object.values",
    "Promise.prototype.allSettled",
    "Promise.prototype.any",
    "Promise.prototype.finally",
    "String.prototype.matchAll",
    "String.prototype.padEnd",
    "String.prototype.padStart",
    "String.prototype.replaceAll",
    "String.prototype.trimEnd",
    "String.prototype.trimLeft",
    "String.prototype.trimRight",
    "String.prototype.trimStart",
];

const fn rule(
    edition: Edition,
    rule: &'static str,
    description: &'static str,
    compat: &'static [&'static str],
) -> FeatureSpec {
    FeatureSpec {
        edition,
        rule,
        description,
        compat,
        polyfill: None,
        options: None,
    }
}

const fn method(
    edition: Edition,
    method: &'static str,
    description: &'static str,
    compat: &'static [&'static str],
) -> FeatureSpec {
    FeatureSpec {
        edition,
        rule: "no-restricted-syntax",
        description,
        compat,
        polyfill: Some(method),
        options: Some(RuleOptions::PrototypeMethod { method }),
    }
}

const fn polyfilled(spec: FeatureSpec, polyfill: &'static str) -> FeatureSpec {
    FeatureSpec {
        polyfill: Some(polyfill),
        ..spec
    }
}

const fn property(
    edition: Edition,
    object: &'static str,
    property: &'static str,
    description: &'static str,
    compat: &'static [&'static str],
) -> FeatureSpec {
    FeatureSpec {
        edition,
        rule: "no-restricted-properties",
        description,
        compat,
        polyfill: None,
        options: Some(RuleOptions::RestrictedProperty { object, property }),
    }
}

static CATALOG: &[FeatureSpec] = &[
    // ES2016
    method(
        Es2016,
        "Array.prototype.includes",
        "disallow the `Array.prototype.includes` method",
        &["javascript.builtins.Array.includes"],
    ),
    rule(
        Es2016,
        "no-exponential-operators",
        "disallow exponential operators",
        &["javascript.operators.exponentiation"],
    ),
    // ES2017
    rule(
        Es2017,
        "no-async-functions",
        "disallow async function declarations",
        &[
            "javascript.statements.async_function",
            "javascript.operators.async_function",
        ],
    ),
    rule(
        Es2017,
        "no-atomics",
        "disallow the `Atomics` class",
        &["javascript.builtins.Atomics"],
    ),
    polyfilled(
        rule(
            Es2017,
            "no-object-entries",
            "disallow the `Object.entries` method",
            &["javascript.builtins.Object.entries"],
        ),
        "Object.entries",
    ),
    polyfilled(
        rule(
            Es2017,
            "no-object-getownpropertydescriptors",
            "disallow the `Object.getOwnPropertyDescriptors` method",
            &["javascript.builtins.Object.getOwnPropertyDescriptors"],
        ),
        "Object.getOwnPropertyDescriptors",
    ),
    polyfilled(
        rule(
            Es2017,
            "no-object-values",
            "disallow the `Object.values` method",
            &["javascript.builtins.Object.values"],
        ),
        "Object.values",
    ),
    rule(
        Es2017,
        "no-shared-array-buffer",
        "disallow the `SharedArrayBuffer` class",
        &["javascript.builtins.SharedArrayBuffer"],
    ),
    method(
        Es2017,
        "String.prototype.padStart",
        "disallow the `String.prototype.padStart` method",
        &["javascript.builtins.String.padStart"],
    ),
    method(
        Es2017,
        "String.prototype.padEnd",
        "disallow the `String.prototype.padEnd` method",
        &["javascript.builtins.String.padEnd"],
    ),
    rule(
        Es2017,
        "no-trailing-function-commas",
        "disallow trailing commas in parameter/argument lists",
        &["javascript.grammar.trailing_commas.trailing_commas_in_functions"],
    ),
    // ES2018
    rule(
        Es2018,
        "no-async-iteration",
        "disallow async iteration",
        &[
            "javascript.statements.for_await_of",
            "javascript.functions.method_definitions.async_generator_methods",
        ],
    ),
    rule(
        Es2018,
        "no-rest-spread-properties",
        "disallow rest/spread properties",
        &[
            "javascript.operators.destructuring.rest_in_objects",
            "javascript.operators.spread.spread_in_object_literals",
        ],
    ),
    method(
        Es2018,
        "Promise.prototype.finally",
        "disallow the `Promise.prototype.finally` method",
        &["javascript.builtins.Promise.finally"],
    ),
    rule(
        Es2018,
        "no-regexp-lookbehind-assertions",
        "disallow RegExp lookbehind assertions",
        &["javascript.regular_expressions.lookbehind_assertion"],
    ),
    rule(
        Es2018,
        "no-regexp-named-capture-groups",
        "disallow RegExp named capture groups",
        &["javascript.regular_expressions.named_capturing_group"],
    ),
    rule(
        Es2018,
        "no-regexp-s-flag",
        "disallow RegExp `s` flag",
        &["javascript.builtins.RegExp.dotAll"],
    ),
    // The 2019 additions to property escapes share this compat entry.
    rule(
        Es2018,
        "no-regexp-unicode-property-escapes",
        "disallow RegExp Unicode property escape sequences",
        &["javascript.regular_expressions.unicode_character_class_escape"],
    ),
    // ES2019
    method(
        Es2019,
        "Array.prototype.flat",
        "disallow the `Array.prototype.flat` method",
        &["javascript.builtins.Array.flat"],
    ),
    method(
        Es2019,
        "Array.prototype.flatMap",
        "disallow the `Array.prototype.flatMap` method",
        &["javascript.builtins.Array.flatMap"],
    ),
    rule(
        Es2019,
        "no-json-superset",
        "disallow `\\u2028` and `\\u2029` in string literals",
        &["javascript.builtins.JSON.json_superset"],
    ),
    polyfilled(
        rule(
            Es2019,
            "no-object-fromentries",
            "disallow the `Object.fromEntries` method",
            &["javascript.builtins.Object.fromEntries"],
        ),
        "Object.fromEntries",
    ),
    rule(
        Es2019,
        "no-optional-catch-binding",
        "disallow optional `catch` binding",
        &["javascript.statements.try_catch.optional_catch_binding"],
    ),
    method(
        Es2019,
        "String.prototype.trimStart",
        "disallow the `String.prototype.trimStart` method",
        &["javascript.builtins.String.trimStart"],
    ),
    method(
        Es2019,
        "String.prototype.trimEnd",
        "disallow the `String.prototype.trimEnd` method",
        &["javascript.builtins.String.trimEnd"],
    ),
    method(
        Es2019,
        "String.prototype.trimLeft",
        "disallow the `String.prototype.trimLeft` method",
        &["javascript.builtins.String.trimStart"],
    ),
    method(
        Es2019,
        "String.prototype.trimRight",
        "disallow the `String.prototype.trimRight` method",
        &["javascript.builtins.String.trimEnd"],
    ),
    rule(
        Es2019,
        "no-symbol-prototype-description",
        "disallow the `Symbol.prototype.description` property",
        &["javascript.builtins.Symbol.description"],
    ),
    // ES2020
    property(
        Es2020,
        "Atomics",
        "notify",
        "disallow the `Atomics.notify` method",
        &["javascript.builtins.Atomics.notify"],
    ),
    property(
        Es2020,
        "Atomics",
        "wait",
        "disallow the `Atomics.wait` method",
        &["javascript.builtins.Atomics.wait"],
    ),
    rule(
        Es2020,
        "no-bigint",
        "disallow `bigint` syntax and built-ins",
        &["javascript.builtins.BigInt"],
    ),
    rule(
        Es2020,
        "no-dynamic-import",
        "disallow `import()` syntax",
        &["javascript.operators.import"],
    ),
    polyfilled(
        rule(
            Es2020,
            "no-global-this",
            "disallow the `globalThis` variable",
            &["javascript.builtins.globalThis"],
        ),
        "globalThis",
    ),
    rule(
        Es2020,
        "no-import-meta",
        "disallow `import.meta` meta property",
        &["javascript.operators.import_meta"],
    ),
    rule(
        Es2020,
        "no-export-ns-from",
        "disallow `export * as ns`",
        &["javascript.statements.export.namespace"],
    ),
    rule(
        Es2020,
        "no-nullish-coalescing-operators",
        "disallow nullish coalescing operators",
        &["javascript.operators.nullish_coalescing"],
    ),
    rule(
        Es2020,
        "no-optional-chaining",
        "disallow optional chaining",
        &["javascript.operators.optional_chaining"],
    ),
    polyfilled(
        rule(
            Es2020,
            "no-promise-all-settled",
            "disallow `Promise.allSettled` function",
            &["javascript.builtins.Promise.allSettled"],
        ),
        "Promise.prototype.allSettled",
    ),
    // May also match Cache/Clients.matchAll().
    method(
        Es2020,
        "String.prototype.matchAll",
        "disallow the `String.prototype.matchAll` method",
        &["javascript.builtins.String.matchAll"],
    ),
    // ES2021
    rule(
        Es2021,
        "no-logical-assignment-operators",
        "disallow logical assignment operators",
        &[
            "javascript.operators.logical_and_assignment",
            "javascript.operators.logical_or_assignment",
            "javascript.operators.nullish_coalescing_assignment",
        ],
    ),
    rule(
        Es2021,
        "no-numeric-separators",
        "disallow numeric separators",
        &["javascript.grammar.numeric_separators"],
    ),
    polyfilled(
        rule(
            Es2021,
            "no-promise-any",
            "disallow `Promise.any` function and `AggregateError` class",
            &["javascript.builtins.Promise.any"],
        ),
        "Promise.prototype.any",
    ),
    method(
        Es2021,
        "String.prototype.replaceAll",
        "disallow the `String.prototype.replaceAll` method",
        &["javascript.builtins.String.replaceAll"],
    ),
    rule(
        Es2021,
        "no-weakrefs",
        "disallow the `WeakRef` and `FinalizationRegistry` class",
        &[
            "javascript.builtins.WeakRef",
            "javascript.builtins.FinalizationRegistry",
        ],
    ),
    // ES2022
    polyfilled(
        rule(
            Es2022,
            "no-array-string-prototype-at",
            "disallow the `{Array,String,TypedArray}.prototype.at()` methods",
            &[
                "javascript.builtins.Array.at",
                "javascript.builtins.String.at",
                "javascript.builtins.TypedArray.at",
            ],
        ),
        "{Array,String,TypedArray}.prototype.at",
    ),
    rule(
        Es2022,
        "no-class-fields",
        "disallow class fields",
        &[
            "javascript.classes.public_class_fields",
            "javascript.classes.private_class_fields",
        ],
    ),
    rule(
        Es2022,
        "no-class-static-block",
        "disallow class static block",
        &["javascript.classes.static_initialization_blocks"],
    ),
    polyfilled(
        rule(
            Es2022,
            "no-error-cause",
            "disallow Error Cause",
            &["javascript.builtins.Error.Error.options_cause_parameter"],
        ),
        "Error.cause",
    ),
    polyfilled(
        rule(
            Es2022,
            "no-object-hasown",
            "disallow the `Object.hasOwn` method",
            &["javascript.builtins.Object.hasOwn"],
        ),
        "Object.hasOwn",
    ),
    rule(
        Es2022,
        "no-regexp-d-flag",
        "disallow RegExp `d` flag",
        &["javascript.builtins.RegExp.hasIndices"],
    ),
    rule(
        Es2022,
        "no-top-level-await",
        "disallow top-level `await`",
        &["javascript.operators.await.top_level"],
    ),
    // ES2023
    polyfilled(
        rule(
            Es2023,
            "no-array-prototype-findlast-findlastindex",
            "disallow the `{Array,TypedArray}.prototype.{findLast,findLastIndex}` methods",
            &[
                "javascript.builtins.Array.findLast",
                "javascript.builtins.Array.findLastIndex",
                "javascript.builtins.TypedArray.findLast",
                "javascript.builtins.TypedArray.findLastIndex",
            ],
        ),
        "{Array,TypedArray}.prototype.findLast",
    ),
    polyfilled(
        rule(
            Es2023,
            "no-array-prototype-toreversed",
            "disallow the `{Array,TypedArray}.prototype.toReversed` methods",
            &[
                "javascript.builtins.Array.toReversed",
                "javascript.builtins.TypedArray.toReversed",
            ],
        ),
        "{Array,TypedArray}.prototype.toReversed",
    ),
    polyfilled(
        rule(
            Es2023,
            "no-array-prototype-tosorted",
            "disallow the `{Array,TypedArray}.prototype.toSorted` methods",
            &[
                "javascript.builtins.Array.toSorted",
                "javascript.builtins.TypedArray.toSorted",
            ],
        ),
        "{Array,TypedArray}.prototype.toSorted",
    ),
    polyfilled(
        rule(
            Es2023,
            "no-array-prototype-tospliced",
            "disallow the `Array.prototype.toSpliced` method",
            &["javascript.builtins.Array.toSpliced"],
        ),
        "Array.prototype.toSpliced",
    ),
    polyfilled(
        rule(
            Es2023,
            "no-array-prototype-with",
            "disallow the `{Array,TypedArray}.prototype.with` methods",
            &[
                "javascript.builtins.Array.with",
                "javascript.builtins.TypedArray.with",
            ],
        ),
        "{Array,TypedArray}.prototype.with",
    ),
    rule(
        Es2023,
        "no-hashbang",
        "disallow Hashbang comments",
        &["javascript.grammar.hashbang_comments"],
    ),
];

/// The full built-in catalog, oldest edition first.
pub fn catalog() -> &'static [FeatureSpec] {
    CATALOG
}

/// Catalog declarations for the given editions, in catalog order.
///
/// An empty edition list selects every edition.
pub fn specs_for(editions: &[Edition]) -> Vec<&'static FeatureSpec> {
    CATALOG
        .iter()
        .filter(|spec| editions.is_empty() || editions.contains(&spec.edition))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_polyfill_is_known() {
        for spec in catalog() {
            if let Some(polyfill) = spec.polyfill {
                assert!(
                    KNOWN_POLYFILLS.contains(&polyfill),
                    "{} declares unknown polyfill {}",
                    spec.description,
                    polyfill
                );
            }
        }
    }

    #[test]
    fn every_known_polyfill_is_used() {
        let used: HashSet<_> = catalog().iter().filter_map(|s| s.polyfill).collect();
        for polyfill in KNOWN_POLYFILLS {
            assert!(used.contains(polyfill), "{} is never declared", polyfill);
        }
    }

    #[test]
    fn every_spec_names_compat_paths() {
        for spec in catalog() {
            assert!(!spec.compat.is_empty(), "{} has no compat paths", spec.description);
            assert!(spec.compat.iter().all(|p| p.starts_with("javascript.")));
        }
    }

    #[test]
    fn catalog_is_grouped_by_edition() {
        assert!(catalog().windows(2).all(|w| w[0].edition <= w[1].edition));
    }

    #[test]
    fn specs_for_filters_editions() {
        let specs = specs_for(&[Edition::Es2016]);
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|s| s.edition == Edition::Es2016));
    }

    #[test]
    fn specs_for_empty_selects_everything() {
        assert_eq!(specs_for(&[]).len(), catalog().len());
    }

    #[test]
    fn method_specs_use_restricted_syntax() {
        let includes = catalog()
            .iter()
            .find(|s| s.polyfill == Some("Array.prototype.includes"))
            .unwrap();
        assert_eq!(includes.rule, "no-restricted-syntax");
        assert!(matches!(
            includes.options,
            Some(RuleOptions::PrototypeMethod { .. })
        ));
    }
}
