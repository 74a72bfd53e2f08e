use crate::model::service::ServicePayloadDto;

/// A ready-made service offered as a one-click starting point on an empty catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExampleService {
    pub name: &'static str,
    pub price: f64,
    pub duration_minutes: i32,
}

impl ExampleService {
    /// Payload creating an active copy of this example
    pub fn payload(&self) -> ServicePayloadDto {
        ServicePayloadDto {
            name: self.name.to_string(),
            price: self.price,
            duration_minutes: self.duration_minutes,
            is_active: true,
        }
    }
}

const fn example(name: &'static str, price: f64, duration_minutes: i32) -> ExampleService {
    ExampleService {
        name,
        price,
        duration_minutes,
    }
}

pub const EXAMPLE_SERVICES: [ExampleService; 8] = [
    example("Corte Masculino", 45.0, 30),
    example("Barba", 30.0, 20),
    example("Corte + Barba", 65.0, 45),
    example("Corte Infantil", 35.0, 25),
    example("Sobrancelha", 15.0, 10),
    example("Pigmentação de Barba", 80.0, 40),
    example("Hidratação Capilar", 50.0, 30),
    example("Corte Degradê", 55.0, 40),
];
