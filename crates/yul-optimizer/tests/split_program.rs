use codespan::{ByteIndex, Span};
use std::collections::BTreeSet;
use std::io::Write;
use std::thread;
use yul_ir::{
    yul_name, Assignment, Block, BuiltinDialect, Case, Expression, ExpressionStatement, ForLoop,
    FunctionCall, FunctionDefinition, Identifier, Literal, Location, Statement, Switch,
    TypedName, VariableDeclaration,
};
use yul_optimizer::{
    split_function, NameDispenser, NameSource, RenameTable, SharedNameSource, SplitOptions,
    SplitProcessor, SplitStats, UsageMasks,
};

fn loc() -> Location {
    Span::new(ByteIndex(0), ByteIndex(0))
}

fn ident(name: &str) -> Identifier {
    Identifier::new(loc(), yul_name(name))
}

fn var(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

fn num(value: &str) -> Expression {
    Expression::Literal(Literal::number(loc(), yul_name(value)))
}

fn call(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::FunctionCall(FunctionCall::new(loc(), ident(name), arguments))
}

fn assign(targets: &[&str], value: Expression) -> Statement {
    Statement::Assignment(Assignment {
        location: loc(),
        variable_names: targets.iter().map(|t| ident(t)).collect(),
        value: Box::new(value),
    })
}

fn expression_statement(expression: Expression) -> Statement {
    Statement::ExpressionStatement(ExpressionStatement {
        location: loc(),
        expression,
    })
}

fn u256(names: &[&str]) -> Vec<TypedName> {
    names
        .iter()
        .map(|n| TypedName::new(loc(), yul_name(n), Some(yul_name("u256"))))
        .collect()
}

fn untyped(names: &[&str]) -> Vec<TypedName> {
    names
        .iter()
        .map(|n| TypedName::untyped(loc(), yul_name(n)))
        .collect()
}

fn function(
    name: &str,
    parameters: Vec<TypedName>,
    return_variables: Vec<TypedName>,
    body: Vec<Statement>,
) -> Statement {
    Statement::FunctionDefinition(FunctionDefinition::new(
        loc(),
        yul_name(name),
        parameters,
        return_variables,
        Block::new(loc(), body),
    ))
}

fn mask(name: &str, keep: &[bool]) -> UsageMasks {
    [(yul_name(name), keep.to_vec())].into_iter().collect()
}

fn functions(program: &Block) -> Vec<&FunctionDefinition> {
    program
        .statements
        .iter()
        .filter_map(|s| match s {
            Statement::FunctionDefinition(f) => Some(f),
            _ => None,
        })
        .collect()
}

/// { function f(a:u256, b:u256) -> r:u256 { r := add(a, b) } }
fn add_program() -> Block {
    Block::new(
        loc(),
        vec![function(
            "f",
            u256(&["a", "b"]),
            u256(&["r"]),
            vec![assign(&["r"], call("add", vec![var("a"), var("b")]))],
        )],
    )
}

fn run(
    program: &mut Block,
    unused_parameters: &UsageMasks,
    unused_return_variables: &UsageMasks,
    rename_table: &RenameTable,
    options: SplitOptions,
) -> SplitStats {
    let dialect = BuiltinDialect::evm();
    let mut dispenser = NameDispenser::new(&dialect, program, BTreeSet::new());
    SplitProcessor::new(&dialect, unused_parameters, unused_return_variables, rename_table)
        .with_options(options)
        .run(program, &mut dispenser)
}

#[test]
fn add_scenario_forwards_single_argument() {
    let mut program = add_program();
    let table: RenameTable = [(yul_name("f"), yul_name("f_1"))].into_iter().collect();
    let options = SplitOptions {
        verify_dropped_unreferenced: false,
        ..SplitOptions::default()
    };

    let stats = run(
        &mut program,
        &mask("f_1", &[true, false]),
        &UsageMasks::new(),
        &table,
        options,
    );

    assert_eq!(
        stats,
        SplitStats {
            split: 1,
            skipped_trivial: 0
        }
    );
    assert_eq!(
        program.to_string(),
        "{\n    function f(a_1:u256, b_2:u256) -> r_3:u256 {\n        r_3 := f_1(a_1)\n    }\n    function f_1(a:u256) -> r:u256 {\n        r := add(a, b)\n    }\n}"
    );
}

#[test]
#[should_panic(expected = "BUG: split of `f_1` dropped slots still referenced in its body: b")]
fn add_scenario_with_live_dropped_parameter_aborts() {
    let mut program = add_program();
    let table: RenameTable = [(yul_name("f"), yul_name("f_1"))].into_iter().collect();
    run(
        &mut program,
        &mask("f_1", &[true, false]),
        &UsageMasks::new(),
        &table,
        SplitOptions::default(),
    );
}

#[test]
fn splits_only_eligible_functions() {
    // The pipeline renamed `f` to `f_1` and `g` to `g_1` before splitting.
    let f_body = vec![
        Statement::VariableDeclaration(VariableDeclaration {
            location: loc(),
            variables: untyped(&["i"]),
            value: Some(Box::new(num("0"))),
        }),
        Statement::ForLoop(ForLoop {
            location: loc(),
            pre: Block::empty(loc()),
            condition: Box::new(call("lt", vec![var("i"), var("n")])),
            post: Block::new(loc(), vec![assign(&["i"], call("add", vec![var("i"), num("1")]))]),
            body: Block::new(
                loc(),
                vec![Statement::Switch(Switch {
                    location: loc(),
                    expression: Box::new(var("i")),
                    cases: vec![
                        Case {
                            location: loc(),
                            value: Some(Literal::number(loc(), yul_name("3"))),
                            body: Block::new(loc(), vec![Statement::Break(loc())]),
                        },
                        Case {
                            location: loc(),
                            value: None,
                            body: Block::new(loc(), vec![Statement::Continue(loc())]),
                        },
                    ],
                })],
            ),
        }),
        assign(&["total"], var("i")),
    ];
    let mut program = Block::new(
        loc(),
        vec![
            expression_statement(call("sstore", vec![num("0"), num("1")])),
            function("f_1", untyped(&["n", "unused"]), untyped(&["total", "zero"]), f_body.clone()),
            function(
                "g_1",
                untyped(&["x", "y"]),
                untyped(&["z"]),
                vec![assign(&["z"], call("f_1", vec![var("x"), var("x")]))],
            ),
            function("h", untyped(&["p"]), untyped(&[]), vec![expression_statement(call("pop", vec![var("p")]))]),
        ],
    );
    let table: RenameTable = [
        (yul_name("f_1"), yul_name("f")),
        (yul_name("g_1"), yul_name("g")),
        (yul_name("h"), yul_name("h")),
    ]
    .into_iter()
    .collect();
    let mut params = mask("f", &[true, false]);
    params.insert(yul_name("g"), vec![true, false]);
    params.insert(yul_name("h"), vec![true]);
    let returns = mask("f", &[true, false]);

    let stats = run(&mut program, &params, &returns, &table, SplitOptions::default());

    assert_eq!(
        stats,
        SplitStats {
            split: 1,
            skipped_trivial: 1
        }
    );
    assert_eq!(program.statements.len(), 5);
    assert!(matches!(program.statements[0], Statement::ExpressionStatement(_)));

    let names: Vec<&str> = functions(&program).iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["f_1", "f", "g_1", "h"]);

    let (wrapper, split_off) = (functions(&program)[0], functions(&program)[1]);
    assert_eq!(split_off.body, Block::new(loc(), f_body));
    assert_eq!(split_off.parameters, untyped(&["n"]));
    assert_eq!(split_off.return_variables, untyped(&["total"]));
    assert_eq!(wrapper.parameters.len(), 2);
    assert_eq!(wrapper.return_variables.len(), 2);
    assert_eq!(
        wrapper.body.to_string(),
        format!(
            "{{\n    {} := f({})\n}}",
            wrapper.return_variables[0].name.as_str(),
            wrapper.parameters[0].name.as_str()
        )
    );
}

#[test]
fn wrapper_slots_avoid_split_off_function_name() {
    // `a_1` was renamed to `a_1_1` upstream, so `a_1` no longer occurs in the program.
    let mut program = Block::new(
        loc(),
        vec![function(
            "a_1_1",
            untyped(&["a", "b"]),
            untyped(&[]),
            vec![expression_statement(call("pop", vec![var("a")]))],
        )],
    );
    let table: RenameTable = [(yul_name("a_1_1"), yul_name("a_1"))].into_iter().collect();

    let stats = run(
        &mut program,
        &mask("a_1", &[true, false]),
        &UsageMasks::new(),
        &table,
        SplitOptions::default(),
    );

    assert_eq!(stats.split, 1);
    let wrapper = functions(&program)[0];
    assert!(wrapper.parameters.iter().all(|p| p.name != yul_name("a_1")));
    assert_eq!(
        program.to_string(),
        "{\n    function a_1_1(a_2, b_3) {\n        a_1(a_2)\n    }\n    function a_1(a) {\n        pop(a)\n    }\n}"
    );
}

#[test]
fn heuristic_gate_can_be_disabled() {
    let mut program = Block::new(
        loc(),
        vec![function(
            "g",
            untyped(&["x", "y"]),
            untyped(&[]),
            vec![expression_statement(call("k", vec![var("x")]))],
        )],
    );
    let table: RenameTable = [(yul_name("g"), yul_name("g_1"))].into_iter().collect();
    let options = SplitOptions {
        skip_trivial_forwarders: false,
        ..SplitOptions::default()
    };

    let stats = run(&mut program, &mask("g_1", &[true, false]), &UsageMasks::new(), &table, options);

    assert_eq!(stats.split, 1);
    assert_eq!(
        program.to_string(),
        "{\n    function g(x_1, y_2) {\n        g_1(x_1)\n    }\n    function g_1(x) {\n        k(x)\n    }\n}"
    );
}

#[test]
fn concurrent_splits_share_one_name_source() {
    let program = Block::new(
        loc(),
        vec![
            function("f", untyped(&["a", "b"]), untyped(&["r"]), vec![assign(&["r"], var("a"))]),
            function("g", untyped(&["a_1", "c"]), untyped(&["s"]), vec![assign(&["s"], var("c"))]),
        ],
    );
    let table: RenameTable = [(yul_name("f"), yul_name("f_2")), (yul_name("g"), yul_name("g_2"))]
        .into_iter()
        .collect();
    let dialect = BuiltinDialect::evm();
    let reserved = table.original_names().cloned().collect();
    let shared = SharedNameSource::new(NameDispenser::new(&dialect, &program, reserved));
    let mut params = mask("f_2", &[true, false]);
    params.insert(yul_name("g_2"), vec![false, true]);
    let returns = UsageMasks::new();

    let mut originals: Vec<FunctionDefinition> = functions(&program).into_iter().cloned().collect();
    let split_off: Vec<FunctionDefinition> = thread::scope(|scope| {
        let handles: Vec<_> = originals
            .iter_mut()
            .map(|original| {
                let (shared, params, returns, table) = (&shared, &params, &returns, &table);
                scope.spawn(move || {
                    let mut names = shared;
                    split_function(original, params, returns, &mut names, table)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("split thread panicked"))
            .collect()
    });

    let mut generated = BTreeSet::new();
    for wrapper in &originals {
        for slot in wrapper.parameters.iter().chain(&wrapper.return_variables) {
            assert!(!program.declared_names().contains(&slot.name));
            assert!(table.original_names().all(|original| *original != slot.name));
            assert!(generated.insert(slot.name.clone()), "duplicate name {}", slot.name.as_str());
        }
    }
    assert_eq!(generated.len(), 6);
    assert_eq!(split_off[0].parameters, untyped(&["a"]));
    assert_eq!(split_off[1].parameters, untyped(&["c"]));

    let mut dispenser = shared.into_inner();
    for name in &generated {
        assert!(dispenser.is_used(name));
    }
    assert!(!generated.contains(&dispenser.new_name(&yul_name("a"))));
}

#[test]
fn options_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "skip-trivial-forwarders = false").unwrap();
    let options = SplitOptions::from_file(file.path()).unwrap();
    assert!(!options.skip_trivial_forwarders);
    assert!(options.verify_dropped_unreferenced);

    let missing = file.path().with_extension("missing");
    let err = SplitOptions::from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("reading split options"));
}
