use serde_json::{Number, Value as Json};

use crate::doc::{DocError, Element, Kind, Map, Result, Sequence, Value};

impl From<Json> for Value {
	fn from(json: Json) -> Self {
		match json {
			Json::Null => Value::Nil,
			Json::Bool(item) => Value::Bool(item),
			Json::Number(number) => number_value(&number),
			Json::String(text) => Value::String(text),
			Json::Array(items) => Value::Seq(Sequence::Value(items.into_iter().map(Value::from).collect())),
			Json::Object(entries) => Value::Map(entries.into_iter().map(|(key, item)| (key, Value::from(item))).collect()),
		}
	}
}

fn number_value(number: &Number) -> Value {
	if let Some(item) = number.as_i64() {
		Value::I64(item)
	} else if let Some(item) = number.as_u64() {
		Value::U64(item)
	} else {
		Value::F64(number.as_f64().unwrap_or(f64::NAN))
	}
}

impl Value {
	/// Decode JSON text into a document.
	pub fn from_json_str(text: &str) -> Result<Self> {
		Ok(serde_json::from_str::<Json>(text)?.into())
	}

	/// Encode this document as JSON.
	pub fn to_json(&self) -> Result<Json> {
		to_json(self)
	}
}

/// Encode a document as JSON.
///
/// Complex numbers become `[re, im]` pairs and byte sequences become arrays of numbers.
/// Opaque payloads and non-finite floats have no encoding and fail with [`DocError::Unrepresentable`].
pub fn to_json(value: &Value) -> Result<Json> {
	let json = match value {
		Value::Nil => Json::Null,
		Value::Bool(item) => Json::Bool(*item),
		Value::I8(item) => Json::from(*item),
		Value::I16(item) => Json::from(*item),
		Value::I32(item) => Json::from(*item),
		Value::I64(item) => Json::from(*item),
		Value::U8(item) => Json::from(*item),
		Value::U16(item) => Json::from(*item),
		Value::U32(item) => Json::from(*item),
		Value::U64(item) => Json::from(*item),
		Value::Usize(item) => Json::from(*item),
		Value::F32(item) => float(f64::from(*item), Kind::F32)?,
		Value::F64(item) => float(*item, Kind::F64)?,
		Value::C64(item) => Json::Array(vec![float(f64::from(item.re), Kind::C64)?, float(f64::from(item.im), Kind::C64)?]),
		Value::C128(item) => Json::Array(vec![float(item.re, Kind::C128)?, float(item.im, Kind::C128)?]),
		Value::String(text) => Json::String(text.clone()),
		Value::Seq(items) => Json::Array(seq_json(items)?),
		Value::Map(map) => map_json(map)?,
		Value::Opaque(_) => return Err(DocError::Unrepresentable { kind: Kind::Other }),
	};
	Ok(json)
}

fn float(item: f64, kind: Kind) -> Result<Json> {
	Number::from_f64(item).map(Json::Number).ok_or(DocError::Unrepresentable { kind })
}

fn map_json(map: &Map) -> Result<Json> {
	let entries = map.iter().map(|(key, item)| Ok((key.clone(), to_json(item)?))).collect::<Result<_>>()?;
	Ok(Json::Object(entries))
}

fn seq_json(items: &Sequence) -> Result<Vec<Json>> {
	match items {
		Sequence::Map(maps) => maps.iter().map(map_json).collect(),
		Sequence::Value(values) => values.iter().map(to_json).collect(),
		scalars => (0..scalars.len())
			.filter_map(|index| scalars.get_at(index))
			.map(|element| match element {
				Element::Owned(item) => to_json(&item),
				Element::Value(item) => to_json(item),
				Element::Map(map) => map_json(map),
			})
			.collect(),
	}
}

#[cfg(test)]
mod tests;
