//! Barrido de evaluación de recordatorios
//!
//! Recorre todos los vehículos, resuelve el odómetro actual de cada uno a
//! partir de su historial, evalúa los recordatorios pendientes contra las
//! reglas de fecha y odómetro, y envía una notificación por cada disparo.
//! No persiste qué recordatorios ya avisaron: un recordatorio vencido vuelve
//! a avisar en cada barrido hasta que se completa o cambia su umbral.

use chrono::NaiveDate;
use sqlx::PgPool;
use tokio::sync::watch;

use crate::models::reminder::Reminder;
use crate::models::vehicle::Vehicle;
use crate::repositories::reminder_repository::ReminderRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::AppError;

/// Ventana de aviso anticipado por fecha
const UPCOMING_WINDOW_DAYS: i64 = 7;
/// Ventana de aviso anticipado por odómetro en km
const APPROACHING_WINDOW_KM: i32 = 500;

/// Condición que disparó un recordatorio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    DateOverdue,
    DateUpcoming,
    OdometerReached,
    OdometerApproaching,
}

/// Disparo de un recordatorio con su razón legible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub reason: String,
}

/// Evaluar un recordatorio contra el odómetro actual y la fecha de hoy.
///
/// Función pura: las dos dimensiones (fecha y odómetro) se evalúan de forma
/// independiente y pueden disparar juntas. Dentro de cada dimensión, la
/// condición alcanzada/vencida tiene prioridad sobre la de aproximación.
/// Un recordatorio completado, o sin fecha ni odómetro, nunca dispara.
pub fn evaluate_reminder(
    reminder: &Reminder,
    current_odometer: i32,
    today: NaiveDate,
) -> Vec<Trigger> {
    if reminder.is_completed {
        return Vec::new();
    }

    let mut triggers = Vec::new();

    if let Some(due_date) = reminder.due_date {
        if today >= due_date {
            triggers.push(Trigger {
                kind: TriggerKind::DateOverdue,
                reason: format!("Date due: {}", due_date.format("%Y-%m-%d")),
            });
        } else if (due_date - today).num_days() < UPCOMING_WINDOW_DAYS {
            triggers.push(Trigger {
                kind: TriggerKind::DateUpcoming,
                reason: format!("Upcoming due date: {}", due_date.format("%Y-%m-%d")),
            });
        }
    }

    if let Some(due_odometer) = reminder.due_odometer {
        if due_odometer > 0 {
            if current_odometer >= due_odometer {
                triggers.push(Trigger {
                    kind: TriggerKind::OdometerReached,
                    reason: format!("Odometer reached: {} km", due_odometer),
                });
            } else if due_odometer - current_odometer < APPROACHING_WINDOW_KM {
                triggers.push(Trigger {
                    kind: TriggerKind::OdometerApproaching,
                    reason: format!(
                        "Odometer approaching: {} km (current {})",
                        due_odometer, current_odometer
                    ),
                });
            }
        }
    }

    triggers
}

/// Cuerpo de la notificación: vehículo, recordatorio y razones del disparo
fn compose_message(vehicle_name: &str, reminder_title: &str, triggers: &[Trigger]) -> String {
    let reasons: Vec<&str> = triggers.iter().map(|t| t.reason.as_str()).collect();
    format!(
        "Vehicle: {}\nReminder: {}\nTrigger: {}",
        vehicle_name,
        reminder_title,
        reasons.join("; ")
    )
}

pub struct ReminderCheckService {
    vehicles: VehicleRepository,
    reminders: ReminderRepository,
    notifier: NotificationService,
}

impl ReminderCheckService {
    pub fn new(pool: PgPool, notifier: NotificationService) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            reminders: ReminderRepository::new(pool),
            notifier,
        }
    }

    /// Un barrido completo sobre todos los vehículos.
    ///
    /// El fallo de un vehículo no aborta el barrido de los demás. El canal
    /// de shutdown se consulta entre vehículos: al cerrarse, el barrido
    /// termina el vehículo en curso y se detiene.
    pub async fn run_sweep(&self, shutdown: &watch::Receiver<bool>) {
        let today = chrono::Utc::now().date_naive();

        let vehicles = match self.vehicles.list_all().await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                log::error!("❌ Reminder sweep: failed to list vehicles: {}", e);
                return;
            }
        };

        log::info!("🔔 Reminder sweep started: {} vehicles", vehicles.len());

        for vehicle in &vehicles {
            if *shutdown.borrow() {
                log::info!("🛑 Reminder sweep interrupted by shutdown");
                return;
            }

            if let Err(e) = self.check_vehicle(vehicle, today).await {
                log::error!(
                    "❌ Reminder sweep: vehicle '{}' skipped: {}",
                    vehicle.name,
                    e
                );
            }
        }

        log::info!("✅ Reminder sweep finished");
    }

    async fn check_vehicle(&self, vehicle: &Vehicle, today: NaiveDate) -> Result<(), AppError> {
        let reminders = self.reminders.list_active_by_vehicle(vehicle.id).await?;
        if reminders.is_empty() {
            return Ok(());
        }

        // El odómetro se resuelve una sola vez por vehículo y se reutiliza
        // para todos sus recordatorios dentro del mismo barrido.
        let current_odometer = match self.vehicles.current_odometer(vehicle.id).await {
            Ok(odometer) => odometer,
            Err(e) => {
                // Modo degradado: sin lectura de odómetro se evalúan igualmente
                // las condiciones por fecha, con el vehículo en el origen.
                log::warn!(
                    "⚠️ Odometer read failed for '{}', assuming 0: {}",
                    vehicle.name,
                    e
                );
                0
            }
        };

        for reminder in &reminders {
            let triggers = evaluate_reminder(reminder, current_odometer, today);
            if triggers.is_empty() {
                continue;
            }

            let title = format!("Reminder: {}", reminder.title);
            let message = compose_message(&vehicle.name, &reminder.title, &triggers);
            log::info!("📣 Sending notification: {}", message.replace('\n', " | "));

            if let Err(e) = self.notifier.send(&title, &message).await {
                // La entrega fallida no es fatal: se continúa con el siguiente
                log::error!("❌ Failed to send notification: {}", e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn reminder(
        due_date: Option<NaiveDate>,
        due_odometer: Option<i32>,
        is_completed: bool,
    ) -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            title: "Oil change".to_string(),
            due_date,
            due_odometer,
            is_recurring: false,
            interval_km: None,
            interval_months: None,
            notes: None,
            is_completed,
            created_at: chrono::Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_reminder_never_fires() {
        let today = date(2024, 6, 1);
        let r = reminder(Some(date(2024, 1, 1)), Some(10_000), true);
        assert!(evaluate_reminder(&r, 99_999, today).is_empty());
    }

    #[test]
    fn test_reminder_without_thresholds_never_fires() {
        let today = date(2024, 6, 1);
        let r = reminder(None, None, false);
        assert!(evaluate_reminder(&r, 99_999, today).is_empty());
    }

    #[test]
    fn test_date_due_today_is_overdue() {
        let today = date(2024, 6, 1);
        let r = reminder(Some(today), None, false);
        let triggers = evaluate_reminder(&r, 0, today);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::DateOverdue);
    }

    #[test]
    fn test_date_overdue_reason_contains_date() {
        let today = date(2024, 1, 5);
        let r = reminder(Some(date(2024, 1, 1)), None, false);
        let triggers = evaluate_reminder(&r, 0, today);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::DateOverdue);
        assert!(triggers[0].reason.contains("2024-01-01"));
    }

    #[test]
    fn test_date_upcoming_within_window() {
        let today = date(2024, 6, 1);
        let r = reminder(Some(today + Duration::days(6)), None, false);
        let triggers = evaluate_reminder(&r, 0, today);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::DateUpcoming);
    }

    #[test]
    fn test_date_exactly_seven_days_away_does_not_fire() {
        let today = date(2024, 6, 1);
        let r = reminder(Some(today + Duration::days(7)), None, false);
        assert!(evaluate_reminder(&r, 0, today).is_empty());
    }

    #[test]
    fn test_odometer_reached_at_boundary() {
        let today = date(2024, 6, 1);
        let r = reminder(None, Some(50_000), false);
        let triggers = evaluate_reminder(&r, 50_000, today);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::OdometerReached);
    }

    #[test]
    fn test_odometer_approaching_strict_window() {
        let today = date(2024, 6, 1);
        let r = reminder(None, Some(50_000), false);

        // A 499 km del umbral dispara
        let triggers = evaluate_reminder(&r, 49_501, today);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::OdometerApproaching);

        // A exactamente 500 km no dispara
        assert!(evaluate_reminder(&r, 49_500, today).is_empty());
    }

    #[test]
    fn test_odometer_approaching_reason_reports_both_values() {
        let today = date(2024, 6, 1);
        let r = reminder(None, Some(50_000), false);
        let triggers = evaluate_reminder(&r, 49_700, today);
        assert_eq!(triggers.len(), 1);
        assert!(triggers[0].reason.contains("50000"));
        assert!(triggers[0].reason.contains("49700"));
    }

    #[test]
    fn test_zero_due_odometer_is_ignored() {
        let today = date(2024, 6, 1);
        let r = reminder(None, Some(0), false);
        assert!(evaluate_reminder(&r, 12_000, today).is_empty());
    }

    #[test]
    fn test_both_dimensions_fire_together() {
        let today = date(2024, 6, 1);
        let r = reminder(Some(date(2024, 5, 1)), Some(30_000), false);
        let triggers = evaluate_reminder(&r, 31_000, today);
        assert_eq!(triggers.len(), 2);
        assert_eq!(triggers[0].kind, TriggerKind::DateOverdue);
        assert_eq!(triggers[1].kind, TriggerKind::OdometerReached);
    }

    #[test]
    fn test_reached_takes_precedence_over_approaching() {
        let today = date(2024, 6, 1);
        let r = reminder(None, Some(50_000), false);
        let triggers = evaluate_reminder(&r, 50_200, today);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::OdometerReached);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let today = date(2024, 6, 1);
        let r = reminder(Some(date(2024, 5, 20)), Some(40_000), false);
        let first = evaluate_reminder(&r, 39_800, today);
        let second = evaluate_reminder(&r, 39_800, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_message_names_vehicle_title_and_reasons() {
        let triggers = vec![
            Trigger {
                kind: TriggerKind::DateOverdue,
                reason: "Date due: 2024-01-01".to_string(),
            },
            Trigger {
                kind: TriggerKind::OdometerReached,
                reason: "Odometer reached: 50000 km".to_string(),
            },
        ];
        let message = compose_message("Honda City", "Oil change", &triggers);
        assert!(message.contains("Honda City"));
        assert!(message.contains("Oil change"));
        assert!(message.contains("Date due: 2024-01-01"));
        assert!(message.contains("Odometer reached: 50000 km"));
    }
}
