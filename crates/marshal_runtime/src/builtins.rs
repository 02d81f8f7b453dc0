//! Built-in methods available from the REPL.
//!
//! | Definition   | Returns                                   |
//! |--------------|-------------------------------------------|
//! | `Echo(.)`    | every argument, unchanged                 |
//! | `Add(?,?)`   | integer sum, or double if either is double |
//! | `Concat(s,.)`| one string joining every argument          |
//! | `Len(s)`     | character count                            |
//! | `Not(b)`     | negation                                   |
//! | `Kinds(.)`   | the kind name of every argument            |

use marshal_command::Dispatcher;
use marshal_foundation::{Error, Result, Value, ValueKind, ValueSeq};

/// Registers every built-in method with `dispatcher`.
///
/// # Errors
///
/// Returns a parse error if a built-in definition is malformed.
pub fn register(dispatcher: &mut Dispatcher) -> Result<()> {
    dispatcher.register("Echo(.)", echo)?;
    dispatcher.register("Add(?,?)", add)?;
    dispatcher.register("Concat(s,.)", concat)?;
    dispatcher.register("Len(s)", len)?;
    dispatcher.register("Not(b)", not)?;
    dispatcher.register("Kinds(.)", kinds)?;
    Ok(())
}

/// Creates a dispatcher with the built-ins already registered.
///
/// # Errors
///
/// Returns a parse error if a built-in definition is malformed.
pub fn dispatcher(config: marshal_command::DispatchConfig) -> Result<Dispatcher> {
    let mut dispatcher = Dispatcher::with_config(config);
    register(&mut dispatcher)?;
    Ok(dispatcher)
}

fn echo(args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
    returns.extend(args.iter().cloned());
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn add(args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
    let sum = match (args.get(0)?, args.get(1)?) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.wrapping_add(*b)),
        (Value::Integer(a), Value::Double(b)) => Value::Double(*a as f64 + b),
        (Value::Double(a), Value::Integer(b)) => Value::Double(a + *b as f64),
        (Value::Double(a), Value::Double(b)) => Value::Double(a + b),
        (Value::Integer(_) | Value::Double(_), other) | (other, _) => {
            return Err(Error::type_mismatch(ValueKind::Double, other.kind()));
        }
    };
    returns.append(sum);
    Ok(())
}

fn concat(args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
    let mut joined = args.get(0)?.as_str()?.to_owned();
    for value in args.iter().skip(1) {
        joined.push_str(&value.to_string());
    }
    returns.append(joined);
    Ok(())
}

fn len(args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
    let count = args.get(0)?.as_str()?.chars().count();
    returns.append(i64::try_from(count).unwrap_or(i64::MAX));
    Ok(())
}

fn not(args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
    returns.append(!args.get(0)?.as_boolean()?);
    Ok(())
}

fn kinds(args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
    returns.extend(args.iter().map(|value| Value::from(value.kind().name())));
    Ok(())
}
