use async_trait::async_trait;
use snmp2::{AsyncSession, Oid, Value};
use tokio::time::{Duration, timeout};
use tracing::{debug, warn};

use super::{RawValue, SnmpTransport, parse_oid};
use crate::error::Result;

const SNMP_PORT: u16 = 161;
const MAX_REPETITIONS: u32 = 10;

/// SNMPv2c транспорт поверх snmp2.
///
/// Сессия открывается на каждый вызов, поэтому один экземпляр можно
/// использовать для любого количества принтеров.
#[derive(Debug, Clone, Default)]
pub struct Snmp2Transport;

impl Snmp2Transport {
    pub fn new() -> Self {
        Self
    }

    async fn open_session(target: &str, community: &str, limit: Duration) -> Option<AsyncSession> {
        let destination = with_default_port(target);

        match timeout(limit, AsyncSession::new_v2c(destination.as_str(), community.as_bytes(), 0))
            .await
        {
            Ok(Ok(session)) => Some(session),
            Ok(Err(e)) => {
                warn!(addr = %destination, "Не удалось создать SNMP сессию: {}", e);
                None
            }
            Err(_) => {
                warn!(addr = %destination, "Таймаут при создании SNMP сессии");
                None
            }
        }
    }
}

#[async_trait]
impl SnmpTransport for Snmp2Transport {
    async fn get(
        &self,
        target: &str,
        community: &str,
        oid: &str,
        timeout_micros: u64,
    ) -> Result<Option<RawValue>> {
        let oid_value = parse_oid(oid)?;
        let limit = Duration::from_micros(timeout_micros);

        let Some(mut session) = Self::open_session(target, community, limit).await else {
            return Ok(None);
        };

        debug!(addr = target, oid, "SNMP GET");
        match timeout(limit, session.get(&oid_value)).await {
            Ok(Ok(resp)) => Ok(resp
                .varbinds
                .into_iter()
                .next()
                .and_then(|(_, value)| raw_value_from(&value))),
            Ok(Err(e)) => {
                warn!(addr = target, oid, "SNMP GET запрос не удался: {:?}", e);
                Ok(None)
            }
            Err(_) => {
                warn!(addr = target, oid, "Таймаут SNMP GET");
                Ok(None)
            }
        }
    }

    async fn walk(
        &self,
        target: &str,
        community: &str,
        oid: &str,
        timeout_micros: u64,
    ) -> Result<Option<Vec<Option<RawValue>>>> {
        let start_oid = parse_oid(oid)?;
        let limit = Duration::from_micros(timeout_micros);

        let Some(mut session) = Self::open_session(target, community, limit).await else {
            return Ok(None);
        };

        debug!(addr = target, oid, "SNMP WALK");
        Ok(walk_bulk(&mut session, &start_oid, limit).await)
    }
}

/// WALK через GETBULK; таймаут действует на каждый запрос отдельно
async fn walk_bulk(
    session: &mut AsyncSession,
    start_oid: &Oid<'_>,
    limit: Duration,
) -> Option<Vec<Option<RawValue>>> {
    let mut results = Vec::new();
    let mut current_oid = start_oid.to_owned();

    loop {
        let resp = match timeout(limit, session.getbulk(&[&current_oid], 0, MAX_REPETITIONS)).await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!(oid = %start_oid, "SNMP GETBULK запрос не удался: {:?}", e);
                return None;
            }
            Err(_) => {
                warn!(oid = %start_oid, "Таймаут SNMP GETBULK");
                return None;
            }
        };

        let mut found_any = false;

        for (oid, value) in resp.varbinds {
            if !oid.starts_with(start_oid) || matches!(value, Value::EndOfMibView) {
                return Some(results);
            }
            // Агент, который не продвигается вперёд, зациклил бы walk
            if oid == current_oid {
                return Some(results);
            }

            results.push(raw_value_from(&value));
            current_oid = oid.to_owned();
            found_any = true;
        }

        if !found_any {
            break;
        }
    }

    Some(results)
}

fn raw_value_from(value: &Value<'_>) -> Option<RawValue> {
    match value {
        Value::Integer(v) => Some(RawValue::Integer(*v)),
        Value::Counter32(v) | Value::Unsigned32(v) | Value::Timeticks(v) => {
            Some(RawValue::Integer(i64::from(*v)))
        }
        Value::Counter64(v) => Some(RawValue::Integer(*v as i64)),
        Value::OctetString(bytes) => Some(RawValue::Text(String::from_utf8_lossy(bytes).into_owned())),
        Value::ObjectIdentifier(oid) => Some(RawValue::Text(oid.to_string())),
        Value::IpAddress(ip) => Some(RawValue::Text(format!("{}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3]))),
        Value::Null | Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => None,
        other => Some(RawValue::Text(format!("{:?}", other))),
    }
}

fn with_default_port(target: &str) -> String {
    if target.contains(':') {
        target.to_string()
    } else {
        format!("{}:{}", target, SNMP_PORT)
    }
}
