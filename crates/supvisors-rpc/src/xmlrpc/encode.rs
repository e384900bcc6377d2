//! Encoding of `methodCall` and `methodResponse` documents.

use std::io::Write;

use xml::writer::{EmitterConfig, EventWriter, XmlEvent};

use super::MethodResponse;
use crate::error::CodecError;
use crate::value::Value;

/// Serialises a `methodCall` for `method` with the ordered `params`.
///
/// # Errors
///
/// Returns [`CodecError`] when a parameter cannot be represented in
/// XML-RPC (an integer outside 32 bits or a non-finite double).
pub fn encode_call(method: &str, params: &[Value]) -> Result<String, CodecError> {
    encode_document(|writer| {
        writer.write(XmlEvent::start_element("methodCall"))?;
        write_text_element(writer, "methodName", method)?;
        write_params(writer, params)?;
        writer.write(XmlEvent::end_element())?;
        Ok(())
    })
}

/// Serialises a `methodResponse` carrying either a value or a fault.
///
/// # Errors
///
/// Returns [`CodecError`] when the value cannot be represented in XML-RPC.
pub fn encode_response(response: &MethodResponse) -> Result<String, CodecError> {
    encode_document(|writer| {
        writer.write(XmlEvent::start_element("methodResponse"))?;
        match response {
            MethodResponse::Success(value) => write_params(writer, std::slice::from_ref(value))?,
            MethodResponse::Fault(fault) => {
                let detail = Value::structure([
                    ("faultCode", Value::from(fault.code)),
                    ("faultString", Value::from(fault.message.as_str())),
                ]);
                writer.write(XmlEvent::start_element("fault"))?;
                write_value(writer, &detail)?;
                writer.write(XmlEvent::end_element())?;
            }
        }
        writer.write(XmlEvent::end_element())?;
        Ok(())
    })
}

fn encode_document<F>(body: F) -> Result<String, CodecError>
where
    F: FnOnce(&mut EventWriter<&mut Vec<u8>>) -> Result<(), CodecError>,
{
    let mut buffer = Vec::new();
    {
        let mut writer = EmitterConfig::new()
            .perform_indent(false)
            .write_document_declaration(true)
            .create_writer(&mut buffer);
        body(&mut writer)?;
    }
    Ok(String::from_utf8(buffer)?)
}

fn write_params<W: Write>(writer: &mut EventWriter<W>, params: &[Value]) -> Result<(), CodecError> {
    writer.write(XmlEvent::start_element("params"))?;
    for param in params {
        writer.write(XmlEvent::start_element("param"))?;
        write_value(writer, param)?;
        writer.write(XmlEvent::end_element())?;
    }
    writer.write(XmlEvent::end_element())?;
    Ok(())
}

fn write_value<W: Write>(writer: &mut EventWriter<W>, value: &Value) -> Result<(), CodecError> {
    writer.write(XmlEvent::start_element("value"))?;
    match value {
        Value::Nil => {
            writer.write(XmlEvent::start_element("nil"))?;
            writer.write(XmlEvent::end_element())?;
        }
        Value::Bool(flag) => write_text_element(writer, "boolean", if *flag { "1" } else { "0" })?,
        Value::Int(number) => {
            let narrow =
                i32::try_from(*number).map_err(|_| CodecError::IntegerOutOfRange(*number))?;
            write_text_element(writer, "int", &narrow.to_string())?;
        }
        Value::Double(number) => {
            if !number.is_finite() {
                return Err(CodecError::NonFiniteDouble(*number));
            }
            write_text_element(writer, "double", &number.to_string())?;
        }
        Value::String(text) => write_text_element(writer, "string", text)?,
        Value::Array(items) => {
            writer.write(XmlEvent::start_element("array"))?;
            writer.write(XmlEvent::start_element("data"))?;
            for item in items {
                write_value(writer, item)?;
            }
            writer.write(XmlEvent::end_element())?;
            writer.write(XmlEvent::end_element())?;
        }
        Value::Struct(members) => {
            writer.write(XmlEvent::start_element("struct"))?;
            for (name, member) in members {
                writer.write(XmlEvent::start_element("member"))?;
                write_text_element(writer, "name", name)?;
                write_value(writer, member)?;
                writer.write(XmlEvent::end_element())?;
            }
            writer.write(XmlEvent::end_element())?;
        }
    }
    writer.write(XmlEvent::end_element())?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut EventWriter<W>,
    name: &str,
    text: &str,
) -> Result<(), CodecError> {
    writer.write(XmlEvent::start_element(name))?;
    if !text.is_empty() {
        writer.write(XmlEvent::characters(text))?;
    }
    writer.write(XmlEvent::end_element())?;
    Ok(())
}
