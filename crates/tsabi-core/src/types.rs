use serde::{Deserialize, Serialize};
use std::fmt;

/// Elementary ABI types. Widths are kept so tags round-trip through
/// `Display`, even though the mapper collapses every integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    Bool,
    Address,
    Uint(u16),
    Int(u16),
    FixedBytes(u8),
    Bytes,
    String,
    Function,
    Fixed { signed: bool, bits: u16, decimals: u8 },
}

impl ScalarType {
    pub fn is_integer(&self) -> bool {
        matches!(self, ScalarType::Uint(_) | ScalarType::Int(_))
    }

    pub fn is_byte_like(&self) -> bool {
        matches!(self, ScalarType::FixedBytes(_) | ScalarType::Bytes)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Bool => write!(f, "bool"),
            ScalarType::Address => write!(f, "address"),
            ScalarType::Uint(bits) => write!(f, "uint{}", bits),
            ScalarType::Int(bits) => write!(f, "int{}", bits),
            ScalarType::FixedBytes(n) => write!(f, "bytes{}", n),
            ScalarType::Bytes => write!(f, "bytes"),
            ScalarType::String => write!(f, "string"),
            ScalarType::Function => write!(f, "function"),
            ScalarType::Fixed {
                signed,
                bits,
                decimals,
            } => {
                let prefix = if *signed { "fixed" } else { "ufixed" };
                write!(f, "{}{}x{}", prefix, bits, decimals)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrayDim {
    Dynamic,
    Fixed(usize),
}

impl fmt::Display for ArrayDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayDim::Dynamic => write!(f, "[]"),
            ArrayDim::Fixed(size) => write!(f, "[{}]", size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Scalar(ScalarType),
    Tuple,
}

/// A resolved ABI type tag: the element type plus its array dimensions,
/// innermost first (`uint8[2][]` is `Uint(8)` with `[Fixed(2), Dynamic]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSpec {
    pub base: BaseType,
    pub dims: Vec<ArrayDim>,
}

impl TypeSpec {
    pub fn scalar(scalar: ScalarType) -> Self {
        Self {
            base: BaseType::Scalar(scalar),
            dims: Vec::new(),
        }
    }

    pub fn tuple() -> Self {
        Self {
            base: BaseType::Tuple,
            dims: Vec::new(),
        }
    }

    pub fn with_dim(mut self, dim: ArrayDim) -> Self {
        self.dims.push(dim);
        self
    }

    pub fn is_array(&self) -> bool {
        !self.dims.is_empty()
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self.base, BaseType::Tuple)
    }

    /// Target-language array suffix. TypeScript has no fixed-length array
    /// shorthand, so every dimension renders as `[]`.
    pub fn array_suffix(&self) -> String {
        "[]".repeat(self.dims.len())
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base {
            BaseType::Scalar(scalar) => write!(f, "{}", scalar)?,
            BaseType::Tuple => write!(f, "tuple")?,
        }
        for dim in &self.dims {
            write!(f, "{}", dim)?;
        }
        Ok(())
    }
}
