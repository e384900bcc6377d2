//! Decoding of `methodCall` and `methodResponse` documents.

use super::tree::{Element, parse_document};
use super::{MethodCall, MethodResponse};
use crate::error::CodecError;
use crate::fault::RemoteFault;
use crate::value::{StructMap, Value};

/// Parses a `methodResponse` document.
///
/// # Errors
///
/// Returns [`CodecError`] when the text is not well-formed XML or does not
/// follow the XML-RPC response grammar.
pub fn decode_response(input: &str) -> Result<MethodResponse, CodecError> {
    let root = parse_document(input)?;
    root.expect_name("methodResponse")?;

    let body = root
        .children
        .first()
        .ok_or(CodecError::MissingElement {
            parent: "methodResponse",
            child: "params",
        })?;

    match body.name.as_str() {
        "params" => {
            let param = body.child("param", "params").map_err(|_| CodecError::EmptyResponse)?;
            let value = param.child("value", "param")?;
            decode_value(value).map(MethodResponse::Success)
        }
        "fault" => {
            let value = body.child("value", "fault")?;
            decode_fault(decode_value(value)?).map(MethodResponse::Fault)
        }
        other => Err(CodecError::UnexpectedElement {
            expected: "params",
            found: other.to_owned(),
        }),
    }
}

/// Parses a `methodCall` document.
///
/// # Errors
///
/// Returns [`CodecError`] when the text is not well-formed XML or does not
/// follow the XML-RPC call grammar.
pub fn decode_call(input: &str) -> Result<MethodCall, CodecError> {
    let root = parse_document(input)?;
    root.expect_name("methodCall")?;

    let method = root.child("methodName", "methodCall")?.text.trim().to_owned();
    let params = match root.child("params", "methodCall") {
        Ok(params) => params
            .children_named("param")
            .map(|param| param.and_then(|element| element.child("value", "param")))
            .map(|value| value.and_then(decode_value))
            .collect::<Result<Vec<_>, _>>()?,
        Err(_) => Vec::new(),
    };

    Ok(MethodCall { method, params })
}

fn decode_value(value: &Element) -> Result<Value, CodecError> {
    value.expect_name("value")?;
    // A value without a type element is a string.
    let Some(typed) = value.children.first() else {
        return Ok(Value::String(value.text.clone()));
    };

    match typed.name.as_str() {
        "int" | "i4" | "i8" => typed
            .text
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid("int", &typed.text)),
        "boolean" => match typed.text.trim() {
            "1" => Ok(Value::Bool(true)),
            "0" => Ok(Value::Bool(false)),
            _ => Err(invalid("boolean", &typed.text)),
        },
        "double" => typed
            .text
            .trim()
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| invalid("double", &typed.text)),
        "string" => Ok(Value::String(typed.text.clone())),
        // Neither has a dedicated variant; both are kept as their wire text.
        "dateTime.iso8601" | "base64" => Ok(Value::String(typed.text.trim().to_owned())),
        "nil" => Ok(Value::Nil),
        "array" => decode_array(typed),
        "struct" => decode_struct(typed),
        other => Err(CodecError::UnsupportedType(other.to_owned())),
    }
}

fn decode_array(array: &Element) -> Result<Value, CodecError> {
    let data = array.child("data", "array")?;
    data.children_named("value")
        .map(|value| value.and_then(decode_value))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn decode_struct(structure: &Element) -> Result<Value, CodecError> {
    let mut members = StructMap::new();
    for entry in structure.children_named("member") {
        let member = entry?;
        let name = member.child("name", "member")?.text.clone();
        let value = decode_value(member.child("value", "member")?)?;
        members.insert(name, value);
    }
    Ok(Value::Struct(members))
}

fn decode_fault(value: Value) -> Result<RemoteFault, CodecError> {
    let members = match value {
        Value::Struct(members) => members,
        other => {
            return Err(CodecError::MalformedFault(format!(
                "expected struct, found {}",
                other.kind()
            )));
        }
    };

    let raw_code = members
        .get("faultCode")
        .and_then(Value::as_int)
        .ok_or_else(|| CodecError::MalformedFault("missing integer faultCode".to_owned()))?;
    let code = i32::try_from(raw_code)
        .map_err(|_| CodecError::MalformedFault(format!("faultCode {raw_code} out of range")))?;
    let message = members
        .get("faultString")
        .and_then(Value::as_str)
        .ok_or_else(|| CodecError::MalformedFault("missing string faultString".to_owned()))?;

    Ok(RemoteFault::new(code, message))
}

fn invalid(kind: &'static str, text: &str) -> CodecError {
    CodecError::InvalidScalar {
        kind,
        text: text.to_owned(),
    }
}
