//! Records exported by the browser edition of the book: a JSON array with
//! Portuguese keys and amounts in currency units.

use crate::base;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LegacyRecord {
    id: u64,
    tipo: Tipo,
    #[serde(default)]
    data: String,
    #[serde(default)]
    valor: serde_json::Value,
    #[serde(default)]
    cliente: String,
    #[serde(default)]
    destino: String,
    #[serde(default)]
    categoria: String,
    #[serde(default)]
    descricao: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum Tipo {
    Receita,
    Despesa,
}

impl LegacyRecord {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl From<LegacyRecord> for base::Record {
    /// Numeric amounts become cents. Anything else is carried over verbatim.
    fn from(value: LegacyRecord) -> Self {
        let amount = match value.valor.as_f64().and_then(base::Cents::from_units) {
            Some(cents) => base::Amount::Cents(cents),
            None => base::Amount::Other(value.valor),
        };
        let details = match value.tipo {
            Tipo::Receita => base::Details::Income {
                client: value.cliente,
                destination: value.destino,
            },
            Tipo::Despesa => base::Details::Expense {
                category: value.categoria,
                description: value.descricao,
            },
        };
        base::Record::from_parts(value.id, value.data, amount, details)
    }
}

/// The whole export.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct Export(Vec<LegacyRecord>);

impl Export {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for Export {
    type Item = LegacyRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::str::FromStr for Export {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
