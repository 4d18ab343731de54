//! Go-syntax rendering of pooled types.

use crate::{ChanDir, Idx, Pool, Tag};

impl Pool {
    /// Render a type the way `go/types` prints it.
    pub fn format(&self, idx: Idx) -> String {
        let mut out = String::new();
        self.format_into(idx, &mut out);
        out
    }

    fn format_list(&self, items: &[Idx], variadic: bool, out: &mut String) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let last = i + 1 == items.len();
            match self.slice_elem(item) {
                Some(elem) if variadic && last => {
                    out.push_str("...");
                    self.format_into(elem, out);
                }
                _ => self.format_into(item, out),
            }
        }
    }

    fn format_into(&self, idx: Idx, out: &mut String) {
        if let Some(name) = idx.name() {
            out.push_str(name);
            return;
        }
        let Some(tag) = self.tag(idx) else {
            out.push_str("<none>");
            return;
        };
        match tag {
            Tag::Basic => out.push_str("<basic>"),
            Tag::Slice | Tag::Pointer => {
                out.push_str(if tag == Tag::Slice { "[]" } else { "*" });
                let elem = self.child(idx, tag).unwrap_or(Idx::NONE);
                self.format_into(elem, out);
            }
            Tag::Array => {
                if let Some((len, elem)) = self.array_parts(idx) {
                    out.push_str(&format!("[{len}]"));
                    self.format_into(elem, out);
                }
            }
            Tag::Map => {
                if let Some((key, value)) = self.map_parts(idx) {
                    out.push_str("map[");
                    self.format_into(key, out);
                    out.push(']');
                    self.format_into(value, out);
                }
            }
            Tag::Chan => {
                if let Some((dir, elem)) = self.chan_parts(idx) {
                    out.push_str(match dir {
                        ChanDir::Both => "chan ",
                        ChanDir::Send => "chan<- ",
                        ChanDir::Recv => "<-chan ",
                    });
                    self.format_into(elem, out);
                }
            }
            Tag::Tuple => {
                let elems = self.tuple_elems(idx).unwrap_or_default();
                out.push('(');
                self.format_list(&elems, false, out);
                out.push(')');
            }
            Tag::Signature => {
                let Some(sig) = self.signature_of(idx) else {
                    return;
                };
                out.push_str("func(");
                self.format_list(&sig.params, sig.variadic, out);
                out.push(')');
                match sig.results.as_slice() {
                    [] => {}
                    [single] => {
                        out.push(' ');
                        self.format_into(*single, out);
                    }
                    results => {
                        out.push_str(" (");
                        self.format_list(results, false, out);
                        out.push(')');
                    }
                }
            }
            Tag::Named => out.push_str(self.named_name(idx).unwrap_or("<named>")),
        }
    }
}
