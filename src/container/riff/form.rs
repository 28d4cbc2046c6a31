use super::chunk::{Chunk, FORM_TYPE_LEN};
use crate::core::chunk::checked_size;
use crate::core::{FourCc, HEADER_LEN};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
	pub id: FourCc,
	pub form_type: FourCc,
	pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Chunk(Chunk),
	Form(Form),
}

impl Form {
	pub fn new(id: FourCc, form_type: FourCc) -> Self {
		Self { id, form_type, children: Vec::new() }
	}

	pub fn riff(form_type: FourCc) -> Self {
		Self::new(FourCc::RIFF, form_type)
	}

	pub fn list(form_type: FourCc) -> Self {
		Self::new(FourCc::LIST, form_type)
	}

	pub fn push<C: Into<Chunk>>(&mut self, chunk: C) -> &mut Self {
		self.children.push(Node::Chunk(chunk.into()));
		self
	}

	pub fn push_form(&mut self, form: Form) -> &mut Self {
		self.children.push(Node::Form(form));
		self
	}

	pub fn size(&self) -> Result<u32> {
		let mut total = FORM_TYPE_LEN as u64;
		for child in &self.children {
			total += child.encoded_len()?;
		}
		let total = usize::try_from(total).map_err(|_| Error::SizeOverflow(usize::MAX))?;
		checked_size(total)
	}

	pub fn encoded_len(&self) -> Result<u64> {
		Ok(HEADER_LEN as u64 + self.size()? as u64)
	}
}

impl Node {
	pub fn encoded_len(&self) -> Result<u64> {
		match self {
			Node::Chunk(chunk) => Ok(chunk.encoded_len()),
			Node::Form(form) => form.encoded_len(),
		}
	}
}
