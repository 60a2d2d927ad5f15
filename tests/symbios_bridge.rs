// tests/symbios_bridge.rs
use glam::Vec2;
use lsystem_architect::{Placement, TurtleConfig, TurtleInterpreter, TurtleOp, TurtleState};
use symbios::{SymbiosState, SymbolTable};

fn setup() -> (TurtleInterpreter, SymbolTable) {
    let mut interner = SymbolTable::new();
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        angle: 90.0,
        length: 1.0,
        placement: Placement::At(TurtleState::default()),
    });

    // Intern symbols
    for sym in ["F", "+", "-", "[", "]", "X"] {
        interner.intern(sym).unwrap();
    }

    interpreter.populate_standard_symbols(&interner);

    (interpreter, interner)
}

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-4
}

#[test]
fn test_parametric_steps_and_turns() {
    let (interpreter, interner) = setup();
    let f = interner.resolve_id("F").unwrap();
    let plus = interner.resolve_id("+").unwrap();

    // F(2) +(90) F -> east 2, then south 1.
    let mut state = SymbiosState::new();
    state.push(f, 0.0, &[2.0]).unwrap();
    state.push(plus, 0.0, &[90.0]).unwrap();
    state.push(f, 0.0, &[]).unwrap();

    let drawing = interpreter.interpret_state(&state);

    assert_eq!(drawing.segments.len(), 2);
    assert!(close(drawing.segments[0].to, Vec2::new(2.0, 0.0)));
    assert_eq!(drawing.segments[1].heading, 90.0);
    assert!(close(drawing.segments[1].to, Vec2::new(2.0, -1.0)));
}

#[test]
fn test_branches_restore_state() {
    let (interpreter, interner) = setup();
    let id = |s: &str| interner.resolve_id(s).unwrap();

    // F [ - F ] X F
    let mut state = SymbiosState::new();
    state.push(id("F"), 0.0, &[]).unwrap();
    state.push(id("["), 0.0, &[]).unwrap();
    state.push(id("-"), 0.0, &[]).unwrap();
    state.push(id("F"), 0.0, &[]).unwrap();
    state.push(id("]"), 0.0, &[]).unwrap();
    state.push(id("X"), 0.0, &[]).unwrap();
    state.push(id("F"), 0.0, &[]).unwrap();

    let drawing = interpreter.interpret_state(&state);

    assert_eq!(drawing.segments.len(), 3);
    assert_eq!((drawing.pushes, drawing.restores), (1, 1));
    assert_eq!(drawing.segments[1].depth, 1);
    assert!(close(drawing.segments[1].to, Vec2::new(1.0, 1.0)));
    assert!(close(drawing.segments[2].to, Vec2::new(2.0, 0.0)));
}

#[test]
fn test_unmapped_symbols_are_ignored() {
    let (mut interpreter, interner) = setup();
    let x = interner.resolve_id("X").unwrap();
    assert_eq!(interpreter.op('X'), TurtleOp::Ignore);

    let mut state = SymbiosState::new();
    state.push(x, 0.0, &[]).unwrap();
    assert!(interpreter.interpret_state(&state).is_empty());

    interpreter.set_symbol_op(x, TurtleOp::Draw);
    assert_eq!(interpreter.interpret_state(&state).segments.len(), 1);
}
