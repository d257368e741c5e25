use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tsabi_core::{
    AbiError, CallClass, CallFlags, ConstructorDescriptor, EventDescriptor, FunctionDescriptor,
    Location, Param, StateMutability,
};

fn function(name: &str, mutability: StateMutability) -> FunctionDescriptor {
    FunctionDescriptor::new(name, CallFlags::with_mutability(mutability))
}

fn compile_one(member: MemberDescriptor, dialect: Dialect) -> Program {
    compile(&[member], &CompileOptions::new(dialect)).unwrap()
}

fn field_list(record: &DeclarationRecord) -> Vec<String> {
    record.fields.iter().map(|f| f.to_string()).collect()
}

fn point(name: &str) -> Param {
    Param::tuple(
        name,
        "tuple",
        vec![Param::new("x", "uint256"), Param::new("y", "uint256")],
    )
}

#[test]
fn test_get_thing_end_to_end() {
    let member = MemberDescriptor::Function(
        function("getThing", StateMutability::View)
            .input(Param::new("id", "uint256"))
            .output(Param::new("name", "string"))
            .output(Param::new("amount", "uint256")),
    );
    let program = compile_one(member, Dialect::EthersV5);

    assert_eq!(program.member_names, vec!["getThing".to_string()]);
    assert_eq!(program.declarations.len(), 1);

    let response = &program.declarations[0];
    assert_eq!(response.name, "GetThingResponse");
    assert_eq!(response.role, Role::Response);
    assert_eq!(
        field_list(response),
        vec![
            "name: string",
            "0: string",
            "amount: BigNumber",
            "1: BigNumber",
            "length: 2",
        ]
    );

    let signature = program.member("getThing").unwrap();
    assert_eq!(signature.class, CallClass::ReadOnly);
    assert_eq!(
        signature.to_string(),
        "getThing(id: BigNumberish, overrides?: ContractCallOverrides): Promise<GetThingResponse>"
    );
}

#[test]
fn test_identical_shapes_dedupe_across_members() {
    let members = vec![
        MemberDescriptor::Function(function("getA", StateMutability::View).output(point("center"))),
        MemberDescriptor::Function(function("getB", StateMutability::View).output(point("center"))),
    ];
    let program = compile(&members, &CompileOptions::new(Dialect::EthersV5)).unwrap();

    assert_eq!(program.declarations.len(), 1);
    assert_eq!(program.declarations[0].name, "GetACenterResponse");
    assert_eq!(
        program.member("getB").unwrap().returns,
        "Promise<GetACenterResponse>"
    );
}

#[test]
fn test_request_and_response_shapes_stay_apart() {
    let member = MemberDescriptor::Function(
        function("move", StateMutability::View)
            .input(point("target"))
            .output(point("target")),
    );
    let program = compile_one(member, Dialect::Web3);

    let names: Vec<&str> = program.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["MoveTargetRequest", "MoveTargetResponse"]);
}

#[test]
fn test_positional_placeholders() {
    let setter = MemberDescriptor::Function(
        function("set", StateMutability::NonPayable)
            .input(Param::new("", "uint256"))
            .input(Param::new("", "address"))
            .input(Param::new("", "bool")),
    );
    let program = compile_one(setter, Dialect::Web3);
    let keys: Vec<&str> = program.members[0]
        .params
        .iter()
        .map(|p| p.key.as_str())
        .collect();
    assert_eq!(keys, vec!["param0", "param1", "param2"]);

    let pair = MemberDescriptor::Function(
        function("pair", StateMutability::View)
            .output(Param::new("", "uint256"))
            .output(Param::new("", "bool")),
    );
    let program = compile_one(pair, Dialect::Web3);
    assert_eq!(
        field_list(&program.declarations[0]),
        vec!["result0: string", "result1: boolean"]
    );
    assert_eq!(
        program.members[0].to_string(),
        "pair(): MethodConstantReturnContext<PairResponse>"
    );
}

#[test]
fn test_mutability_driven_shapes() {
    let members = vec![
        MemberDescriptor::Function(function("deposit", StateMutability::Payable)),
        MemberDescriptor::Function(function("ping", StateMutability::View)),
        MemberDescriptor::Function(
            function("swap", StateMutability::NonPayable)
                .output(Param::new("amountIn", "uint256"))
                .output(Param::new("amountOut", "uint256")),
        ),
    ];
    let program = compile(&members, &CompileOptions::new(Dialect::EthersV6)).unwrap();

    let rendered: Vec<String> = program.members.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "deposit(overrides?: ContractTransactionOverrides): Promise<ContractTransactionResponse>",
            "ping(overrides?: ContractCallOverrides): Promise<void>",
            "swap(overrides?: ContractTransactionOverrides): Promise<ContractTransactionResponse>",
        ]
    );
    // no per-field response for a mutating multi-output member
    assert!(program.declarations.is_empty());
}

#[test]
fn test_mutating_single_tuple_output_is_still_declared() {
    let member = MemberDescriptor::Function(
        function("mint", StateMutability::NonPayable).output(point("position")),
    );
    let program = compile_one(member, Dialect::EthersV5);

    assert_eq!(program.declarations.len(), 1);
    assert_eq!(program.declarations[0].name, "MintPositionResponse");
    assert_eq!(program.members[0].returns, "Promise<ContractTransaction>");
}

#[test]
fn test_web3_wrappers() {
    let members = vec![
        MemberDescriptor::Function(function("fund", StateMutability::Payable)),
        MemberDescriptor::Function(
            function("burn", StateMutability::NonPayable).input(Param::new("amount", "uint256")),
        ),
        MemberDescriptor::Function(
            function("owner", StateMutability::View).output(Param::new("", "address")),
        ),
    ];
    let program = compile(&members, &CompileOptions::new(Dialect::Web3)).unwrap();

    let rendered: Vec<String> = program.members.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "fund(): MethodPayableReturnContext",
            "burn(amount: string): MethodReturnContext",
            "owner(): MethodConstantReturnContext<string>",
        ]
    );
}

#[test]
fn test_three_level_nesting() {
    let innermost = Param::tuple("c", "tuple", vec![Param::new("v", "uint8")]);
    let middle = Param::tuple("b", "tuple", vec![innermost]);
    let outer = Param::tuple("a", "tuple", vec![middle]);
    let member = MemberDescriptor::Function(function("outer", StateMutability::View).input(outer));

    let program = compile_one(member, Dialect::Web3);

    let declared: Vec<(String, Vec<String>)> = program
        .declarations
        .iter()
        .map(|d| (d.name.clone(), field_list(d)))
        .collect();
    assert_eq!(
        declared,
        vec![
            ("OuterCRequest".to_string(), vec!["v: string".to_string()]),
            ("OuterBRequest".to_string(), vec!["c: OuterCRequest".to_string()]),
            ("OuterARequest".to_string(), vec!["b: OuterBRequest".to_string()]),
        ]
    );
    assert_eq!(
        program.members[0].to_string(),
        "outer(a: OuterARequest): MethodConstantReturnContext<void>"
    );
}

#[test]
fn test_array_of_tuples_registers_once() {
    let items = Param::tuple("items", "tuple[]", vec![Param::new("id", "uint256")]);
    let member = MemberDescriptor::Function(function("list", StateMutability::View).output(items));
    let program = compile_one(member, Dialect::EthersV5);

    assert_eq!(program.declarations.len(), 1);
    assert_eq!(program.declarations[0].name, "ListItemsResponse");
    assert_eq!(
        field_list(&program.declarations[0]),
        vec!["id: BigNumber", "0: BigNumber"]
    );
    assert_eq!(program.members[0].returns, "Promise<ListItemsResponse[]>");
}

#[test]
fn test_nested_array_dimensions() {
    let member = MemberDescriptor::Function(
        function("grid", StateMutability::Pure).output(Param::new("cells", "uint8[3][]")),
    );
    let program = compile_one(member, Dialect::EthersV6);
    assert_eq!(program.members[0].returns, "Promise<bigint[][]>");
}

#[test]
fn test_struct_name_from_internal_type() {
    let position = point("").with_internal_type("struct Pool.Position[]");
    let position = Param {
        type_tag: "tuple[]".to_string(),
        ..position
    };
    let member =
        MemberDescriptor::Function(function("positions", StateMutability::View).output(position));
    let program = compile_one(member, Dialect::Web3);

    assert_eq!(program.declarations[0].name, "PositionResponse");
    assert_eq!(
        program.members[0].returns,
        "MethodConstantReturnContext<PositionResponse[]>"
    );
}

#[test]
fn test_candidate_collision_gets_numbered() {
    let first = Param::tuple("data", "tuple", vec![Param::new("a", "uint256")]);
    let second = Param::tuple("data", "tuple", vec![Param::new("b", "bool")]);
    let members = vec![
        MemberDescriptor::Function(function("info", StateMutability::View).output(first)),
        MemberDescriptor::Function(function("info", StateMutability::View).output(second)),
    ];
    let program = compile(&members, &CompileOptions::new(Dialect::Web3)).unwrap();

    let names: Vec<&str> = program.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["InfoDataResponse", "InfoDataResponse2"]);
    assert_eq!(program.member_names.len(), 2);
    assert_eq!(program.unique_member_names(), vec!["info"]);
}

#[test]
fn test_events() {
    let transfer = MemberDescriptor::Event(EventDescriptor {
        name: "Transfer".to_string(),
        inputs: vec![
            Param::new("from", "address").indexed(),
            Param::new("to", "address").indexed(),
            Param::new("value", "uint256"),
        ],
        anonymous: false,
    });
    let paused = MemberDescriptor::Event(EventDescriptor {
        name: "Paused".to_string(),
        inputs: vec![],
        anonymous: false,
    });

    let program = compile(
        &[transfer.clone(), paused.clone()],
        &CompileOptions::new(Dialect::EthersV5),
    )
    .unwrap();
    assert_eq!(program.event_names, vec!["Transfer", "Paused"]);
    assert_eq!(program.declarations.len(), 1);
    assert_eq!(program.declarations[0].name, "TransferEventEmittedResponse");
    assert_eq!(
        field_list(&program.declarations[0]),
        vec!["from: string", "to: string", "value: BigNumberish"]
    );
    assert_eq!(
        program.events[0].to_string(),
        "Transfer(from: string, to: string, value: BigNumberish): EventFilter"
    );
    assert_eq!(program.events[1].to_string(), "Paused(): EventFilter");

    let program = compile(&[transfer, paused], &CompileOptions::new(Dialect::Web3)).unwrap();
    assert_eq!(
        program.events[0].to_string(),
        "Transfer(parameters: { filter?: { from?: string | string[]; to?: string | string[] }; \
         fromBlock?: number; toBlock?: 'latest' | number; topics?: string[] }, \
         callback?: (error: Error, event: EventData) => void): EventResponse"
    );
}

#[test]
fn test_constructor_signature() {
    let ctor = MemberDescriptor::Constructor(ConstructorDescriptor {
        inputs: vec![Param::new("owner", "address")],
        flags: CallFlags::with_mutability(StateMutability::NonPayable),
    });
    let program = compile_one(ctor, Dialect::EthersV5);

    assert_eq!(program.member_names, vec![CONSTRUCTOR_NAME.to_string()]);
    assert_eq!(
        program.members[0].to_string(),
        "'new'(owner: string, overrides?: ContractTransactionOverrides): Promise<ContractTransaction>"
    );
}

#[test]
fn test_constructor_tuple_input_naming() {
    let ctor = MemberDescriptor::Constructor(ConstructorDescriptor {
        inputs: vec![point("origin")],
        flags: CallFlags::default(),
    });
    let program = compile_one(ctor, Dialect::Web3);
    assert_eq!(program.declarations[0].name, "ConstructorOriginRequest");
}

#[test]
fn test_compile_document_skips_non_callable() {
    let document = json!([
        { "type": "fallback", "stateMutability": "payable" },
        { "type": "receive", "stateMutability": "payable" },
        { "type": "error", "name": "Unauthorized", "inputs": [] },
        {
            "constant": true,
            "inputs": [],
            "name": "totalSupply",
            "outputs": [{ "name": "", "type": "uint256" }],
            "payable": false,
            "type": "function"
        }
    ])
    .to_string();

    let program = compile_document(&document, &CompileOptions::new(Dialect::EthersV5)).unwrap();
    assert_eq!(program.member_names, vec!["totalSupply"]);
    assert_eq!(program.members[0].class, CallClass::ReadOnly);
    assert_eq!(program.members[0].returns, "Promise<BigNumber>");
}

#[test]
fn test_prefix_applies_to_top_level_names() {
    let options = CompileOptions::new(Dialect::Web3).with_prefix("uniswap_factory");
    let program = compile(&[], &options).unwrap();
    assert_eq!(program.names.contract, "UniswapFactoryContract");
    assert_eq!(program.names.method_names, "UniswapFactoryMethodNames");

    let blank = CompileOptions::new(Dialect::Web3).with_prefix("  ");
    assert_eq!(blank.prefix, None);
}

#[test]
fn test_compile_is_deterministic() {
    let document = json!([
        { "type": "constructor", "inputs": [{ "name": "", "type": "uint256" }] },
        {
            "type": "function",
            "name": "quote",
            "stateMutability": "view",
            "inputs": [{
                "name": "route",
                "type": "tuple[]",
                "components": [
                    { "name": "pool", "type": "address" },
                    { "name": "fee", "type": "uint24" }
                ]
            }],
            "outputs": [
                { "name": "", "type": "uint256" },
                { "name": "", "type": "bytes32" }
            ]
        },
        {
            "type": "event",
            "name": "Quoted",
            "inputs": [{ "name": "amount", "type": "uint256", "indexed": false }]
        }
    ])
    .to_string();

    for dialect in Dialect::ALL {
        let options = CompileOptions::new(dialect);
        let first = compile_document(&document, &options).unwrap();
        let second = compile_document(&document, &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unsupported_type_is_located() {
    let member = MemberDescriptor::Function(
        function("broken", StateMutability::View)
            .output(Param::new("ok", "uint256"))
            .output(Param::tuple(
                "price",
                "tuple",
                vec![Param::new("value", "fixed128x18")],
            )),
    );
    let err = compile(&[member], &CompileOptions::new(Dialect::EthersV5)).unwrap_err();
    assert_eq!(
        err,
        AbiError::UnsupportedType {
            type_tag: "fixed128x18".to_string(),
            location: Some(Location::new("broken", "outputs[1].components[0]")),
        }
    );
}

#[test]
fn test_unknown_tag_aborts_pass() {
    let members = vec![
        MemberDescriptor::Function(function("fine", StateMutability::View)),
        MemberDescriptor::Function(
            function("odd", StateMutability::NonPayable).input(Param::new("n", "uint7")),
        ),
    ];
    let err = compile(&members, &CompileOptions::new(Dialect::Web3)).unwrap_err();
    match err {
        AbiError::UnsupportedType { location, .. } => {
            assert_eq!(location, Some(Location::new("odd", "inputs[0]")));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_tuple_without_components() {
    let member = MemberDescriptor::Function(
        function("bad", StateMutability::View).input(Param::new("t", "tuple")),
    );
    let err = compile(&[member], &CompileOptions::new(Dialect::Web3)).unwrap_err();
    assert!(matches!(err, AbiError::InvalidParameter { .. }));
}

#[test]
fn test_options_parse_rejects_unknown_dialect() {
    assert_eq!(
        CompileOptions::parse("ethers-v6").unwrap().dialect,
        Dialect::EthersV6
    );
    assert_eq!(
        CompileOptions::parse("ethers_v4").unwrap_err(),
        AbiError::UnsupportedDialect("ethers_v4".to_string())
    );
}

#[test]
fn test_member_docs() {
    let member = MemberDescriptor::Function(
        function("approve", StateMutability::NonPayable)
            .input(Param::new("spender", "address"))
            .input(Param::new("", "uint256")),
    );
    let program = compile_one(member, Dialect::EthersV5);
    assert_eq!(
        program.members[0].docs.lines(),
        vec![
            "Payable: false",
            "Constant: false",
            "StateMutability: nonpayable",
            "Type: function",
            "@param spender Type: address, Indexed: false",
            "@param param1 Type: uint256, Indexed: false",
        ]
    );
}

#[test]
fn test_events_with_identical_shapes_keep_own_records() {
    let event = |name: &str| {
        MemberDescriptor::Event(EventDescriptor {
            name: name.to_string(),
            inputs: vec![
                Param::new("user", "address").indexed(),
                Param::new("amount", "uint256"),
            ],
            anonymous: false,
        })
    };
    let program = compile(
        &[event("Deposit"), event("Withdrawal")],
        &CompileOptions::new(Dialect::EthersV5),
    )
    .unwrap();

    let names: Vec<&str> = program.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DepositEventEmittedResponse", "WithdrawalEventEmittedResponse"]
    );
    assert_eq!(
        field_list(&program.declarations[1]),
        vec!["user: string", "amount: BigNumberish"]
    );
}

#[test]
fn test_union_token_grouped_under_array_suffix() {
    let member = MemberDescriptor::Function(
        function("setRoots", StateMutability::NonPayable)
            .input(Param::new("roots", "bytes32[]"))
            .input(Param::new("proofs", "bytes[][]"))
            .input(Param::new("root", "bytes32")),
    );
    let program = compile_one(member, Dialect::Web3);
    assert_eq!(
        program.members[0].to_string(),
        "setRoots(roots: (string | number[])[], proofs: (string | number[])[][], root: string | number[]): MethodReturnContext"
    );

    let logged = MemberDescriptor::Event(EventDescriptor {
        name: "RootsSet".to_string(),
        inputs: vec![Param::new("roots", "bytes32[]").indexed()],
        anonymous: false,
    });
    let program = compile_one(logged, Dialect::Web3);
    assert!(program.events[0]
        .to_string()
        .contains("filter?: { roots?: (string | number[])[] | (string | number[])[][] }"));
}

#[test]
fn test_nested_placeholders_index_within_parent_tuple() {
    let order = Param::tuple(
        "order",
        "tuple",
        vec![
            Param::new("", "address"),
            Param::tuple("", "tuple", vec![Param::new("", "uint256")]),
        ],
    );
    let program = compile_one(
        MemberDescriptor::Function(function("submit", StateMutability::NonPayable).input(order)),
        Dialect::Web3,
    );
    let declared: Vec<(String, Vec<String>)> = program
        .declarations
        .iter()
        .map(|d| (d.name.clone(), field_list(d)))
        .collect();
    assert_eq!(
        declared,
        vec![
            ("SubmitParam1Request".to_string(), vec!["param0: string".to_string()]),
            (
                "SubmitOrderRequest".to_string(),
                vec![
                    "param0: string".to_string(),
                    "param1: SubmitParam1Request".to_string(),
                ]
            ),
        ]
    );

    let quote = Param::tuple(
        "",
        "tuple",
        vec![
            Param::new("", "uint256"),
            Param::tuple("", "tuple", vec![Param::new("", "bool")]),
        ],
    );
    let program = compile_one(
        MemberDescriptor::Function(function("quote", StateMutability::View).output(quote)),
        Dialect::EthersV5,
    );
    let declared: Vec<(String, Vec<String>)> = program
        .declarations
        .iter()
        .map(|d| (d.name.clone(), field_list(d)))
        .collect();
    assert_eq!(
        declared,
        vec![
            (
                "QuoteResult1Response".to_string(),
                vec!["result0: boolean".to_string(), "0: boolean".to_string()]
            ),
            (
                "QuoteResult0Response".to_string(),
                vec![
                    "result0: BigNumber".to_string(),
                    "0: BigNumber".to_string(),
                    "result1: QuoteResult1Response".to_string(),
                    "1: QuoteResult1Response".to_string(),
                ]
            ),
        ]
    );
    assert_eq!(program.members[0].returns, "Promise<QuoteResult0Response>");
}
