//! Roster resolution and attendance aggregation.
//!
//! A member is on an event's roster iff they belong to a commission linked
//! to the event, or the event auto-includes district leadership and the
//! member's role is in the configured leadership set.

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::queries;
use super::status::{AttendanceStatus, LABEL_ABSENT, LABEL_CAME, EXCUSED_PREFIX};
use super::types::{AttendanceInfo, AttendanceStats, MemberWithAttendance};
use crate::collate;
use crate::config::LeadershipRoles;
use crate::models::member::{self, MemberDetail, MemberRoleRow};

/// Compute the de-duplicated roster for an event, ordered by full name
/// under Turkish collation. An event with no commissions and leadership
/// inclusion off yields an empty roster.
pub async fn resolve(
    pool: &SqlitePool,
    event_id: i64,
    include_leadership: bool,
    leadership: &LeadershipRoles,
) -> sqlx::Result<Vec<MemberDetail>> {
    let names = leadership.names();
    let mut sql = String::from(
        "SELECT m.id, m.first_name, m.last_name, m.phone, m.email, m.address, \
                m.created_at, m.updated_at, \
                r.id AS role_id, r.name AS role_name, \
                r.description AS role_description, r.sort_order AS role_sort_order \
         FROM members m \
         LEFT JOIN district_roles r ON r.id = m.district_role_id \
         WHERE m.id IN (SELECT cm.member_id FROM commission_members cm \
                        JOIN event_commissions ec ON ec.commission_id = cm.commission_id \
                        WHERE ec.event_id = ?)",
    );
    if include_leadership && !names.is_empty() {
        let placeholders = vec!["?"; names.len()].join(", ");
        sql.push_str(&format!(" OR r.name IN ({placeholders})"));
    }

    let mut query = sqlx::query_as::<_, MemberRoleRow>(&sql).bind(event_id);
    if include_leadership {
        for name in names {
            query = query.bind(name);
        }
    }
    let rows = query.fetch_all(pool).await?;

    let mut roster = member::attach_details(pool, rows).await?;
    roster.sort_by(|a, b| collate::compare(&a.full_name(), &b.full_name()));
    Ok(roster)
}

/// Join the roster against the event's recorded attendance. Members without
/// a record stay undetermined (`attendance: null`); records for members no
/// longer on the roster are ignored.
pub async fn attach_attendance(
    pool: &SqlitePool,
    event_id: i64,
    roster: Vec<MemberDetail>,
) -> sqlx::Result<Vec<MemberWithAttendance>> {
    let records = queries::find_by_event(pool, event_id).await?;
    let mut by_member: HashMap<i64, _> = records
        .into_iter()
        .map(|record| (record.member_id, record))
        .collect();

    Ok(roster
        .into_iter()
        .map(|detail| {
            let attendance = by_member.remove(&detail.id).map(|record| {
                let attended = AttendanceStatus::from_note(&record.status).attended();
                AttendanceInfo {
                    record_id: record.id,
                    attended,
                    status: record.status,
                    updated_at: record.updated_at,
                }
            });
            MemberWithAttendance {
                member: detail,
                attendance,
            }
        })
        .collect())
}

/// Reduce a merged roster into per-status counts and the participation
/// rate. `undetermined` is the residual of the other three counts, so the
/// identity `total = came + excused + absent + undetermined` holds by
/// construction.
pub fn compute_stats(members: &[MemberWithAttendance]) -> AttendanceStats {
    let total = members.len() as i64;
    let mut came = 0;
    let mut excused = 0;
    let mut absent = 0;
    for member in members {
        if let Some(info) = &member.attendance {
            if info.attended || info.status == LABEL_CAME {
                came += 1;
            } else if info.status.starts_with(EXCUSED_PREFIX) {
                excused += 1;
            } else if info.status == LABEL_ABSENT {
                absent += 1;
            }
        }
    }
    let undetermined = total - (came + excused + absent);
    let participation_rate = if total > 0 {
        ((came as f64 / total as f64) * 100.0).round() as i64
    } else {
        0
    };
    AttendanceStats {
        total,
        came,
        excused,
        absent,
        undetermined,
        participation_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_member(id: i64, status: Option<&str>) -> MemberWithAttendance {
        MemberWithAttendance {
            member: MemberDetail {
                id,
                first_name: format!("Üye{id}"),
                last_name: "Test".to_string(),
                phone: String::new(),
                email: String::new(),
                address: String::new(),
                district_role: None,
                commissions: Vec::new(),
                neighborhoods: Vec::new(),
                created_at: String::new(),
                updated_at: String::new(),
            },
            attendance: status.map(|s| AttendanceInfo {
                record_id: id,
                attended: s == LABEL_CAME,
                status: s.to_string(),
                updated_at: String::new(),
            }),
        }
    }

    #[test]
    fn stats_counts_sum_to_total() {
        let members = vec![
            roster_member(1, Some("Geldi")),
            roster_member(2, Some("Gelmedi")),
            roster_member(3, Some("Mazeretli: Hastalık")),
            roster_member(4, None),
        ];
        let stats = compute_stats(&members);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.came, 1);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.excused, 1);
        assert_eq!(stats.undetermined, 1);
        assert_eq!(
            stats.total,
            stats.came + stats.excused + stats.absent + stats.undetermined
        );
    }

    #[test]
    fn participation_rate_rounds_the_percentage() {
        let mut members: Vec<_> = (1..=7).map(|i| roster_member(i, Some("Geldi"))).collect();
        members.extend((8..=10).map(|i| roster_member(i, Some("Gelmedi"))));
        let stats = compute_stats(&members);
        assert_eq!(stats.participation_rate, 70);
    }

    #[test]
    fn empty_roster_has_zero_rate() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.participation_rate, 0);
    }

    #[test]
    fn unrecognized_status_falls_into_the_residual() {
        let members = vec![roster_member(1, Some("Belki"))];
        let stats = compute_stats(&members);
        assert_eq!(stats.came, 0);
        assert_eq!(stats.absent, 0);
        assert_eq!(stats.excused, 0);
        assert_eq!(stats.undetermined, 1);
    }
}
