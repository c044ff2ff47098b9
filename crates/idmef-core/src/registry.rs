//! Static IDMEF class registry.
//!
//! The registry is a set of `&'static` tables describing, per class, the
//! scalar fields it may carry and the sub-objects it may contain. It is built
//! into the binary, never mutated, and therefore safe to read from any thread
//! without locking. Wire tags are part of each descriptor and are stable: the
//! binary codec relies on them, so existing tags must never be renumbered.

/// Type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// Free-form UTF-8 text.
    Str,
    /// Unsigned 32-bit integer.
    Uint32,
    /// One of a fixed set of labels.
    Enum(&'static [&'static str]),
}

impl ScalarType {
    /// Human-readable name, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            ScalarType::Str => "string",
            ScalarType::Uint32 => "unsigned integer",
            ScalarType::Enum(_) => "enumeration label",
        }
    }
}

/// One scalar field of a class.
#[derive(Debug)]
pub struct ScalarDesc {
    pub name: &'static str,
    /// Wire tag, unique among the scalars of the owning class.
    pub tag: u8,
    pub ty: ScalarType,
}

/// One sub-object slot of a class.
#[derive(Debug)]
pub struct ChildDesc {
    pub name: &'static str,
    /// Wire tag, unique among the children of the owning class.
    pub tag: u8,
    pub class: &'static ClassDesc,
    /// Listed children hold an ordered sequence of objects; non-listed
    /// children hold at most one. Indexing a non-listed child is an error.
    pub listed: bool,
}

/// Description of one IDMEF class.
#[derive(Debug)]
pub struct ClassDesc {
    pub name: &'static str,
    pub scalars: &'static [ScalarDesc],
    pub children: &'static [ChildDesc],
}

impl ClassDesc {
    /// Look up a scalar field by name. Returns its declaration position.
    pub fn scalar(&self, name: &str) -> Option<(usize, &'static ScalarDesc)> {
        self.scalars.iter().position(|s| s.name == name).map(|i| (i, &self.scalars[i]))
    }

    /// Look up a child slot by name. Returns its declaration position.
    pub fn child(&self, name: &str) -> Option<(usize, &'static ChildDesc)> {
        self.children.iter().position(|c| c.name == name).map(|i| (i, &self.children[i]))
    }

    /// Look up a scalar field by wire tag.
    pub fn scalar_by_tag(&self, tag: u8) -> Option<(usize, &'static ScalarDesc)> {
        self.scalars.iter().position(|s| s.tag == tag).map(|i| (i, &self.scalars[i]))
    }

    /// Look up a child slot by wire tag.
    pub fn child_by_tag(&self, tag: u8) -> Option<(usize, &'static ChildDesc)> {
        self.children.iter().position(|c| c.tag == tag).map(|i| (i, &self.children[i]))
    }
}

const SPOOFED: &[&str] = &["unknown", "yes", "no"];

const NODE_CATEGORY: &[&str] = &[
    "unknown", "ads", "afs", "coda", "dfs", "dns", "hosts", "kerberos", "nds", "nis", "nisplus",
    "nt", "wfw",
];

const ADDRESS_CATEGORY: &[&str] = &[
    "unknown",
    "atm",
    "e-mail",
    "lotus-notes",
    "mac",
    "sna",
    "vm",
    "ipv4-addr",
    "ipv4-addr-hex",
    "ipv4-net",
    "ipv4-net-mask",
    "ipv6-addr",
    "ipv6-addr-hex",
    "ipv6-net",
    "ipv6-net-mask",
];

const REFERENCE_ORIGIN: &[&str] =
    &["unknown", "vendor-specific", "user-specific", "bugtraqid", "cve", "osvdb"];

const ADDITIONAL_DATA_TYPE: &[&str] = &[
    "boolean",
    "byte",
    "character",
    "date-time",
    "integer",
    "ntpstamp",
    "portlist",
    "real",
    "string",
    "byte-string",
    "xml",
];

static ADDRESS: ClassDesc = ClassDesc {
    name: "address",
    scalars: &[
        ScalarDesc { name: "ident", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "category", tag: 1, ty: ScalarType::Enum(ADDRESS_CATEGORY) },
        ScalarDesc { name: "vlan_name", tag: 2, ty: ScalarType::Str },
        ScalarDesc { name: "vlan_num", tag: 3, ty: ScalarType::Uint32 },
        ScalarDesc { name: "address", tag: 4, ty: ScalarType::Str },
        ScalarDesc { name: "netmask", tag: 5, ty: ScalarType::Str },
    ],
    children: &[],
};

static NODE: ClassDesc = ClassDesc {
    name: "node",
    scalars: &[
        ScalarDesc { name: "ident", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "category", tag: 1, ty: ScalarType::Enum(NODE_CATEGORY) },
        ScalarDesc { name: "location", tag: 2, ty: ScalarType::Str },
        ScalarDesc { name: "name", tag: 3, ty: ScalarType::Str },
    ],
    children: &[ChildDesc { name: "address", tag: 0, class: &ADDRESS, listed: true }],
};

static SERVICE: ClassDesc = ClassDesc {
    name: "service",
    scalars: &[
        ScalarDesc { name: "ident", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "name", tag: 1, ty: ScalarType::Str },
        ScalarDesc { name: "port", tag: 2, ty: ScalarType::Uint32 },
        ScalarDesc { name: "protocol", tag: 3, ty: ScalarType::Str },
    ],
    children: &[],
};

static SOURCE: ClassDesc = ClassDesc {
    name: "source",
    scalars: &[
        ScalarDesc { name: "ident", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "spoofed", tag: 1, ty: ScalarType::Enum(SPOOFED) },
        ScalarDesc { name: "interface", tag: 2, ty: ScalarType::Str },
    ],
    children: &[
        ChildDesc { name: "node", tag: 0, class: &NODE, listed: false },
        ChildDesc { name: "service", tag: 1, class: &SERVICE, listed: false },
    ],
};

static TARGET: ClassDesc = ClassDesc {
    name: "target",
    scalars: &[
        ScalarDesc { name: "ident", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "decoy", tag: 1, ty: ScalarType::Enum(SPOOFED) },
        ScalarDesc { name: "interface", tag: 2, ty: ScalarType::Str },
    ],
    children: &[
        ChildDesc { name: "node", tag: 0, class: &NODE, listed: false },
        ChildDesc { name: "service", tag: 1, class: &SERVICE, listed: false },
    ],
};

static REFERENCE: ClassDesc = ClassDesc {
    name: "reference",
    scalars: &[
        ScalarDesc { name: "origin", tag: 0, ty: ScalarType::Enum(REFERENCE_ORIGIN) },
        ScalarDesc { name: "name", tag: 1, ty: ScalarType::Str },
        ScalarDesc { name: "url", tag: 2, ty: ScalarType::Str },
    ],
    children: &[],
};

static CLASSIFICATION: ClassDesc = ClassDesc {
    name: "classification",
    scalars: &[
        ScalarDesc { name: "ident", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "text", tag: 1, ty: ScalarType::Str },
    ],
    children: &[ChildDesc { name: "reference", tag: 0, class: &REFERENCE, listed: true }],
};

static ANALYZER: ClassDesc = ClassDesc {
    name: "analyzer",
    scalars: &[
        ScalarDesc { name: "analyzerid", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "name", tag: 1, ty: ScalarType::Str },
        ScalarDesc { name: "manufacturer", tag: 2, ty: ScalarType::Str },
        ScalarDesc { name: "model", tag: 3, ty: ScalarType::Str },
        ScalarDesc { name: "version", tag: 4, ty: ScalarType::Str },
        ScalarDesc { name: "class", tag: 5, ty: ScalarType::Str },
        ScalarDesc { name: "ostype", tag: 6, ty: ScalarType::Str },
        ScalarDesc { name: "osversion", tag: 7, ty: ScalarType::Str },
    ],
    children: &[ChildDesc { name: "node", tag: 0, class: &NODE, listed: false }],
};

static ADDITIONAL_DATA: ClassDesc = ClassDesc {
    name: "additional_data",
    scalars: &[
        ScalarDesc { name: "type", tag: 0, ty: ScalarType::Enum(ADDITIONAL_DATA_TYPE) },
        ScalarDesc { name: "meaning", tag: 1, ty: ScalarType::Str },
        ScalarDesc { name: "data", tag: 2, ty: ScalarType::Str },
    ],
    children: &[],
};

static ALERT: ClassDesc = ClassDesc {
    name: "alert",
    scalars: &[ScalarDesc { name: "messageid", tag: 0, ty: ScalarType::Str }],
    children: &[
        ChildDesc { name: "analyzer", tag: 0, class: &ANALYZER, listed: false },
        ChildDesc { name: "classification", tag: 1, class: &CLASSIFICATION, listed: false },
        ChildDesc { name: "source", tag: 2, class: &SOURCE, listed: true },
        ChildDesc { name: "target", tag: 3, class: &TARGET, listed: true },
        ChildDesc { name: "additional_data", tag: 4, class: &ADDITIONAL_DATA, listed: true },
    ],
};

static HEARTBEAT: ClassDesc = ClassDesc {
    name: "heartbeat",
    scalars: &[
        ScalarDesc { name: "messageid", tag: 0, ty: ScalarType::Str },
        ScalarDesc { name: "heartbeat_interval", tag: 1, ty: ScalarType::Uint32 },
    ],
    children: &[
        ChildDesc { name: "analyzer", tag: 0, class: &ANALYZER, listed: false },
        ChildDesc { name: "additional_data", tag: 1, class: &ADDITIONAL_DATA, listed: true },
    ],
};

static MESSAGE: ClassDesc = ClassDesc {
    name: "message",
    scalars: &[ScalarDesc { name: "version", tag: 0, ty: ScalarType::Str }],
    children: &[
        ChildDesc { name: "alert", tag: 0, class: &ALERT, listed: false },
        ChildDesc { name: "heartbeat", tag: 1, class: &HEARTBEAT, listed: false },
    ],
};

static CLASSES: &[&ClassDesc] = &[
    &MESSAGE,
    &ALERT,
    &HEARTBEAT,
    &ANALYZER,
    &CLASSIFICATION,
    &REFERENCE,
    &SOURCE,
    &TARGET,
    &NODE,
    &ADDRESS,
    &SERVICE,
    &ADDITIONAL_DATA,
];

/// The top-level message class every tree is rooted at.
pub fn root() -> &'static ClassDesc {
    &MESSAGE
}

/// Look up a class description by name.
pub fn class(name: &str) -> Option<&'static ClassDesc> {
    CLASSES.iter().copied().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_lookup() {
        assert_eq!(class("alert").unwrap().name, "alert");
        assert_eq!(class("address").unwrap().name, "address");
        assert!(class("nonsense").is_none());
    }

    #[test]
    fn test_child_lookup() {
        let alert = class("alert").unwrap();
        let (_, source) = alert.child("source").unwrap();
        assert!(source.listed);
        assert_eq!(source.class.name, "source");

        let (_, classification) = alert.child("classification").unwrap();
        assert!(!classification.listed);
    }

    #[test]
    fn test_scalar_lookup() {
        let address = class("address").unwrap();
        let (pos, desc) = address.scalar("address").unwrap();
        assert_eq!(pos, 4);
        assert_eq!(desc.ty, ScalarType::Str);
        assert!(address.scalar("port").is_none());
    }

    #[test]
    fn test_tags_are_unique_per_class() {
        for class in CLASSES {
            for (i, a) in class.scalars.iter().enumerate() {
                for b in &class.scalars[i + 1..] {
                    assert_ne!(a.tag, b.tag, "duplicate scalar tag in {}", class.name);
                }
            }
            for (i, a) in class.children.iter().enumerate() {
                for b in &class.children[i + 1..] {
                    assert_ne!(a.tag, b.tag, "duplicate child tag in {}", class.name);
                }
            }
        }
    }

    #[test]
    fn test_tag_round_trip() {
        let node = class("node").unwrap();
        let (pos, desc) = node.scalar("category").unwrap();
        assert_eq!(node.scalar_by_tag(desc.tag).unwrap().0, pos);
        let (pos, desc) = node.child("address").unwrap();
        assert_eq!(node.child_by_tag(desc.tag).unwrap().0, pos);
    }
}
