//! Models shared by the integration tests, and the schema they map to.

use skiff::{
    schema::{self, Field},
    Error, Model, Navigation, Result, Value, Variant,
};

pub const SCHEMA: &str = r#"
CREATE TABLE "Customer" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "Name" TEXT NOT NULL
);

CREATE TABLE "Order" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "CustomerId" INTEGER REFERENCES "Customer" ("Id")
);

CREATE TABLE "Vehicle" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "Name" TEXT NOT NULL,
    "Wheels" INTEGER,
    "Payload" REAL,
    "Discriminator" TEXT
);

CREATE TABLE "Employee" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "Name" TEXT NOT NULL,
    "ManagerId" INTEGER REFERENCES "Employee" ("Id")
);

CREATE TABLE "Accounts" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "DisplayName" TEXT NOT NULL,
    "IsActive" INTEGER NOT NULL,
    "Legacy" TEXT
);

CREATE TABLE "Tag" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "Label" TEXT NOT NULL UNIQUE
);
"#;

// Customer / Order

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub orders: Vec<Order>,
}

static CUSTOMER: schema::Model = schema::Model {
    name: "Customer",
    table: None,
    fields: &[Field::new("Id"), Field::new("Name")],
    base: None,
};

impl Customer {
    pub fn named(name: &str) -> Customer {
        Customer {
            name: name.to_string(),
            ..Customer::default()
        }
    }
}

impl Model for Customer {
    fn schema() -> &'static schema::Model {
        &CUSTOMER
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "Name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "Name" => self.name = value.load()?,
            _ => return Err(Error::unknown_field("Customer", field)),
        }
        Ok(())
    }

    fn navigations() -> Vec<Navigation<Self>> {
        vec![Navigation::<Self>::has_many::<Order>(
            "orders",
            |customer, orders| customer.orders = orders,
        )]
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
    pub customer: Option<Customer>,
}

static ORDER: schema::Model = schema::Model {
    name: "Order",
    table: None,
    fields: &[Field::new("Id"), Field::new("CustomerId")],
    base: None,
};

impl Order {
    pub fn for_customer(customer_id: Option<i64>) -> Order {
        Order {
            customer_id,
            ..Order::default()
        }
    }
}

impl Model for Order {
    fn schema() -> &'static schema::Model {
        &ORDER
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "CustomerId" => Some(self.customer_id.into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "CustomerId" => self.customer_id = value.load()?,
            _ => return Err(Error::unknown_field("Order", field)),
        }
        Ok(())
    }

    fn navigations() -> Vec<Navigation<Self>> {
        vec![Navigation::<Self>::belongs_to::<Customer>(
            "customer",
            |order, customer| order.customer = customer,
        )]
    }
}

/// Same table as [`Order`], without any relationship declared.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BareOrder {
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
}

static BARE_ORDER: schema::Model = schema::Model {
    name: "BareOrder",
    table: Some("Order"),
    fields: &[Field::new("Id"), Field::new("CustomerId")],
    base: None,
};

impl Model for BareOrder {
    fn schema() -> &'static schema::Model {
        &BARE_ORDER
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "CustomerId" => Some(self.customer_id.into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "CustomerId" => self.customer_id = value.load()?,
            _ => return Err(Error::unknown_field("BareOrder", field)),
        }
        Ok(())
    }
}

// Vehicle hierarchy, stored in one table

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vehicle {
    pub id: Option<i64>,
    pub name: String,
    pub kind: VehicleKind,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum VehicleKind {
    #[default]
    Plain,
    Car {
        wheels: i32,
    },
    Truck {
        payload: f64,
    },
}

static VEHICLE: schema::Model = schema::Model {
    name: "Vehicle",
    table: None,
    fields: &[
        Field::new("Id"),
        Field::new("Name"),
        Field::new("Wheels"),
        Field::new("Payload"),
    ],
    base: None,
};

impl Model for Vehicle {
    fn schema() -> &'static schema::Model {
        &VEHICLE
    }

    fn get(&self, field: &str) -> Option<Value> {
        match (field, &self.kind) {
            ("Id", _) => Some(self.id.into()),
            ("Name", _) => Some(self.name.as_str().into()),
            ("Wheels", VehicleKind::Car { wheels }) => Some((*wheels).into()),
            ("Payload", VehicleKind::Truck { payload }) => Some((*payload).into()),
            ("Wheels" | "Payload", _) => Some(Value::Null),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match (field, &mut self.kind) {
            ("Id", _) => self.id = value.load()?,
            ("Name", _) => self.name = value.load()?,
            ("Wheels", VehicleKind::Car { wheels }) => *wheels = value.load()?,
            ("Payload", VehicleKind::Truck { payload }) => *payload = value.load()?,
            ("Wheels" | "Payload", _) => {}
            _ => return Err(Error::unknown_field("Vehicle", field)),
        }
        Ok(())
    }

    fn discriminator(&self) -> Option<&'static str> {
        match self.kind {
            VehicleKind::Plain => None,
            VehicleKind::Car { .. } => Some("Car"),
            VehicleKind::Truck { .. } => Some("Truck"),
        }
    }

    fn variants() -> &'static [Variant<Self>] {
        const VARIANTS: &[Variant<Vehicle>] = &[
            Variant::new("Car", || Vehicle {
                kind: VehicleKind::Car { wheels: 0 },
                ..Vehicle::default()
            }),
            Variant::new("Truck", || Vehicle {
                kind: VehicleKind::Truck { payload: 0.0 },
                ..Vehicle::default()
            }),
        ];

        VARIANTS
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Car {
    pub id: Option<i64>,
    pub name: String,
    pub wheels: i32,
}

static CAR: schema::Model = schema::Model {
    name: "Car",
    table: None,
    fields: &[Field::new("Id"), Field::new("Name"), Field::new("Wheels")],
    base: Some(&VEHICLE),
};

impl Model for Car {
    fn schema() -> &'static schema::Model {
        &CAR
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "Name" => Some(self.name.as_str().into()),
            "Wheels" => Some(self.wheels.into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "Name" => self.name = value.load()?,
            "Wheels" => self.wheels = value.load()?,
            _ => return Err(Error::unknown_field("Car", field)),
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Truck {
    pub id: Option<i64>,
    pub name: String,
    pub payload: f64,
}

static TRUCK: schema::Model = schema::Model {
    name: "Truck",
    table: None,
    fields: &[Field::new("Id"), Field::new("Name"), Field::new("Payload")],
    base: Some(&VEHICLE),
};

impl Model for Truck {
    fn schema() -> &'static schema::Model {
        &TRUCK
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "Name" => Some(self.name.as_str().into()),
            "Payload" => Some(self.payload.into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "Name" => self.name = value.load()?,
            "Payload" => self.payload = value.load()?,
            _ => return Err(Error::unknown_field("Truck", field)),
        }
        Ok(())
    }
}

// Self-referencing edge

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub manager_id: Option<i64>,
    pub manager: Option<Box<Employee>>,
    pub reports: Vec<Employee>,
}

static EMPLOYEE: schema::Model = schema::Model {
    name: "Employee",
    table: None,
    fields: &[
        Field::new("Id"),
        Field::new("Name"),
        Field::new("ManagerId"),
    ],
    base: None,
};

impl Employee {
    pub fn new(name: &str, manager_id: Option<i64>) -> Employee {
        Employee {
            name: name.to_string(),
            manager_id,
            ..Employee::default()
        }
    }
}

impl Model for Employee {
    fn schema() -> &'static schema::Model {
        &EMPLOYEE
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "Name" => Some(self.name.as_str().into()),
            "ManagerId" => Some(self.manager_id.into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "Name" => self.name = value.load()?,
            "ManagerId" => self.manager_id = value.load()?,
            _ => return Err(Error::unknown_field("Employee", field)),
        }
        Ok(())
    }

    fn navigations() -> Vec<Navigation<Self>> {
        vec![
            Navigation::<Self>::has_many::<Employee>("reports", |employee, reports| {
                employee.reports = reports
            }),
            Navigation::<Self>::belongs_to::<Employee>("manager", |employee, manager| {
                employee.manager = manager.map(Box::new)
            })
            .via("ManagerId"),
        ]
    }
}

// Table and column overrides

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Account {
    pub id: Option<i64>,
    pub display_name: String,
    pub active: bool,
}

static ACCOUNT: schema::Model = schema::Model {
    name: "Account",
    table: Some("Accounts"),
    fields: &[
        Field::new("id").column("Id"),
        Field::new("display_name").column("DisplayName"),
        Field::new("active").column("IsActive"),
        Field::new("nickname").column("Nickname"),
    ],
    base: None,
};

impl Model for Account {
    fn schema() -> &'static schema::Model {
        &ACCOUNT
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "display_name" => Some(self.display_name.as_str().into()),
            "active" => Some(self.active.into()),
            "nickname" => Some(Value::Null),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = value.load()?,
            "display_name" => self.display_name = value.load()?,
            "active" => self.active = value.load()?,
            "nickname" => {}
            _ => return Err(Error::unknown_field("Account", field)),
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tag {
    pub id: Option<i64>,
    pub label: String,
}

static TAG: schema::Model = schema::Model {
    name: "Tag",
    table: None,
    fields: &[Field::new("Id"), Field::new("Label")],
    base: None,
};

impl Model for Tag {
    fn schema() -> &'static schema::Model {
        &TAG
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Id" => Some(self.id.into()),
            "Label" => Some(self.label.as_str().into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Id" => self.id = value.load()?,
            "Label" => self.label = value.load()?,
            _ => return Err(Error::unknown_field("Tag", field)),
        }
        Ok(())
    }
}

/// Maps to a table that does not exist.
#[derive(Debug, Default)]
pub struct Ghost;

static GHOST: schema::Model = schema::Model {
    name: "Ghost",
    table: None,
    fields: &[Field::new("Id")],
    base: None,
};

impl Model for Ghost {
    fn schema() -> &'static schema::Model {
        &GHOST
    }

    fn get(&self, _field: &str) -> Option<Value> {
        None
    }

    fn set(&mut self, field: &str, _value: Value) -> Result<()> {
        Err(Error::unknown_field("Ghost", field))
    }
}
