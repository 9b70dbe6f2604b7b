use crate::builder::{check_pizza_count, collect_line_items};
use crate::console::Console;
use crate::input::{read_number, read_valid_name, read_valid_phone, read_yes_no};
use crate::lifecycle::SessionError;
use crate::menu::Menu;
use crate::model::{Order, OrderCreate, OrderKind, OrderUpdate, MAX_PIZZAS};
use crate::render;
use crate::store::OrderStore;
use tracing::{debug, info, instrument, warn};

const NAME_PROMPT: &str = "Please enter the customer's name: ";

/// Customer details gathered before any pizza is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub kind: OrderKind,
    pub address: String,
    pub phone: String,
}

/// Where the session is within one order cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitOrderType,
    CollectCustomer(OrderKind),
    CollectPizzas(CustomerDetails),
    Summarize(OrderCreate),
    KitchenDisplay,
    OfferCancel,
    OfferModify,
    OfferContinue,
    Terminate,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::AwaitOrderType => "AwaitOrderType",
            SessionState::CollectCustomer(_) => "CollectCustomer",
            SessionState::CollectPizzas(_) => "CollectPizzas",
            SessionState::Summarize(_) => "Summarize",
            SessionState::KitchenDisplay => "KitchenDisplay",
            SessionState::OfferCancel => "OfferCancel",
            SessionState::OfferModify => "OfferModify",
            SessionState::OfferContinue => "OfferContinue",
            SessionState::Terminate => "Terminate",
        }
    }
}

/// One run of the order desk.
///
/// # Example
///
/// ```
/// use crusty_pizza::console::mock::ScriptedConsole;
/// use crusty_pizza::lifecycle::Session;
///
/// let console = ScriptedConsole::new([
///     "pickup", "Amy", "1", "2", "no", "no", "no",
/// ]);
/// let mut session = Session::new(console);
/// session.run().unwrap();
/// assert_eq!(session.store().len(), 1);
/// ```
pub struct Session<C: Console> {
    console: C,
    store: OrderStore,
    menu: Menu,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            store: OrderStore::new(),
            menu: Menu::default(),
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs order cycles until the operator declines another order.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started");
        self.console.write_line("Welcome to Crusty's Pizza!")?;

        let mut state = SessionState::AwaitOrderType;
        while state != SessionState::Terminate {
            state = self.step(state)?;
        }

        info!(orders = self.store.len(), "Session finished");
        Ok(())
    }

    /// Performs the work of `state` and returns the state that follows it.
    #[instrument(skip_all, fields(state = state.name()))]
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        debug!("Entering state");
        let next = match state {
            SessionState::AwaitOrderType => self.await_order_type()?,
            SessionState::CollectCustomer(kind) => self.collect_customer(kind)?,
            SessionState::CollectPizzas(customer) => self.collect_pizzas(customer)?,
            SessionState::Summarize(params) => self.summarize(params)?,
            SessionState::KitchenDisplay => {
                self.console.write_lines(&render::kitchen_screen(&self.store))?;
                SessionState::OfferCancel
            }
            SessionState::OfferCancel => self.offer_cancel()?,
            SessionState::OfferModify => self.offer_modify()?,
            SessionState::OfferContinue => self.offer_continue()?,
            SessionState::Terminate => SessionState::Terminate,
        };
        debug!(next = next.name(), "Transition");
        Ok(next)
    }

    fn await_order_type(&mut self) -> Result<SessionState, SessionError> {
        let answer = self.console.read_line(
            "Is this order for pickup or delivery? (Enter 'pickup' or 'delivery'): ",
        )?;
        match OrderKind::parse(&answer) {
            Some(kind) => Ok(SessionState::CollectCustomer(kind)),
            None => {
                self.console.write_line("Invalid order type. Please try again.")?;
                Ok(SessionState::AwaitOrderType)
            }
        }
    }

    fn collect_customer(&mut self, kind: OrderKind) -> Result<SessionState, SessionError> {
        let name = read_valid_name(&mut self.console, NAME_PROMPT)?;
        let (address, phone) = match kind {
            OrderKind::Delivery => {
                let address = self
                    .console
                    .read_line("Please enter the customer's address: ")?;
                let phone = read_valid_phone(&mut self.console)?;
                (address, phone)
            }
            OrderKind::Pickup => (String::new(), String::new()),
        };
        Ok(SessionState::CollectPizzas(CustomerDetails {
            name,
            kind,
            address,
            phone,
        }))
    }

    fn collect_pizzas(&mut self, customer: CustomerDetails) -> Result<SessionState, SessionError> {
        self.console.write_lines(&self.menu.display_lines())?;
        self.console.write_line("")?;

        let Some(count) = self.read_pizza_count()? else {
            warn!(customer = %customer.name, "Order abandoned");
            return Ok(SessionState::AwaitOrderType);
        };
        let (line_items, pizza_subtotal) = collect_line_items(&mut self.console, count, &self.menu)?;

        Ok(SessionState::Summarize(OrderCreate {
            customer_name: customer.name,
            order_kind: customer.kind,
            customer_address: customer.address,
            customer_phone: customer.phone,
            line_items,
            pizza_subtotal,
        }))
    }

    fn summarize(&mut self, params: OrderCreate) -> Result<SessionState, SessionError> {
        let order = Order::from_create(params)?;
        self.console.write_lines(&render::order_summary(&order))?;
        info!(
            number = self.store.len() + 1,
            pizzas = order.pizza_count(),
            total = %order.grand_total(),
            "Order created"
        );
        self.store.append(order);
        Ok(SessionState::KitchenDisplay)
    }

    fn offer_cancel(&mut self) -> Result<SessionState, SessionError> {
        if read_yes_no(
            &mut self.console,
            "Would you like to cancel the order? (Enter 'yes' or 'no'): ",
        )? {
            let cancelled = self.store.remove_last()?;
            info!(customer = %cancelled.customer_name, "Order cancelled");
            self.console.write_line("Order has been cancelled.")?;
        } else {
            self.console.write_line("Thank you for your order!")?;
        }
        Ok(SessionState::OfferModify)
    }

    fn offer_modify(&mut self) -> Result<SessionState, SessionError> {
        if !read_yes_no(
            &mut self.console,
            "Would you like to modify an order? (Enter 'yes' or 'no'): ",
        )? {
            return Ok(SessionState::OfferContinue);
        }

        let requested = read_number(&mut self.console, "Enter the order number you want to modify: ")?;
        let number = usize::try_from(requested).unwrap_or(0);
        let details = match self.store.get(number) {
            Ok(order) => render::order_details(order),
            Err(e) => {
                debug!(error = %e, "Modify rejected");
                self.console.write_line("Invalid order number.")?;
                return Ok(SessionState::OfferContinue);
            }
        };
        self.console.write_lines(&details)?;

        let choice = self.console.read_line(
            "What would you like to modify? (Enter 'name', 'address', 'phone', 'pizzas', or 'cancel'): ",
        )?;
        let update = match choice.to_lowercase().as_str() {
            "name" => Some(OrderUpdate::Name(read_valid_name(
                &mut self.console,
                "Enter the new customer name: ",
            )?)),
            "address" => Some(OrderUpdate::Address(
                self.console.read_line("Enter the new customer address: ")?,
            )),
            "phone" => Some(OrderUpdate::Phone(
                self.console.read_line("Enter the new customer phone number: ")?,
            )),
            "pizzas" => match self.read_pizza_count()? {
                Some(count) => {
                    let (line_items, pizza_subtotal) =
                        collect_line_items(&mut self.console, count, &self.menu)?;
                    Some(OrderUpdate::Pizzas {
                        line_items,
                        pizza_subtotal,
                    })
                }
                None => None,
            },
            "cancel" => {
                self.console.write_line("Modification cancelled.")?;
                None
            }
            _ => {
                self.console.write_line("Invalid choice. Modification cancelled.")?;
                None
            }
        };

        if let Some(update) = update {
            info!(number, ?update, "Modifying order");
            self.store.update(number, update)?;
            self.console.write_line(&format!("Order {} has been updated.", number))?;
        }
        Ok(SessionState::OfferContinue)
    }

    fn offer_continue(&mut self) -> Result<SessionState, SessionError> {
        if read_yes_no(
            &mut self.console,
            "Would you like to place another order? (Enter 'yes' or 'no'): ",
        )? {
            return Ok(SessionState::AwaitOrderType);
        }
        self.console
            .write_line("Thank you for using Crusty's Pizza Ordering System. Goodbye!")?;
        Ok(SessionState::Terminate)
    }

    /// Asks how many pizzas to order. `None` means the limit was exceeded and
    /// the message has already been shown.
    fn read_pizza_count(&mut self) -> Result<Option<usize>, SessionError> {
        let prompt = format!(
            "How many pizzas would you like to order? (Maximum {}): ",
            MAX_PIZZAS
        );
        let requested = read_number(&mut self.console, &prompt)?;
        match check_pizza_count(requested) {
            Ok(count) => Ok(Some(count)),
            Err(e) => {
                warn!(requested, "Pizza count over the limit");
                self.console.write_line(&e.to_string())?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::ScriptedConsole;
    use crate::model::Money;

    fn session(answers: &[&str]) -> Session<ScriptedConsole> {
        Session::new(ScriptedConsole::new(answers.iter().copied()))
    }

    #[test]
    fn test_unknown_order_type_restarts() {
        let mut session = session(&["takeaway"]);
        let next = session.step(SessionState::AwaitOrderType).unwrap();
        assert_eq!(next, SessionState::AwaitOrderType);
        assert!(session.console().printed("Invalid order type"));
    }

    #[test]
    fn test_pickup_collects_name_only() {
        let mut session = session(&["Amy"]);
        let next = session
            .step(SessionState::CollectCustomer(OrderKind::Pickup))
            .unwrap();
        assert_eq!(
            next,
            SessionState::CollectPizzas(CustomerDetails {
                name: "Amy".to_string(),
                kind: OrderKind::Pickup,
                address: String::new(),
                phone: String::new(),
            })
        );
        assert_eq!(session.console().remaining(), 0);
    }

    #[test]
    fn test_delivery_collects_address_and_phone() {
        let mut session = session(&["Amy", "1 Crust Lane", "0211234567"]);
        let next = session
            .step(SessionState::CollectCustomer(OrderKind::Delivery))
            .unwrap();
        let SessionState::CollectPizzas(customer) = next else {
            panic!("expected CollectPizzas");
        };
        assert_eq!(customer.address, "1 Crust Lane");
        assert_eq!(customer.phone, "0211234567");
    }

    #[test]
    fn test_six_pizzas_abandons_order() {
        let mut session = session(&["6"]);
        let customer = CustomerDetails {
            name: "Amy".to_string(),
            kind: OrderKind::Pickup,
            address: String::new(),
            phone: String::new(),
        };
        let next = session.step(SessionState::CollectPizzas(customer)).unwrap();
        assert_eq!(next, SessionState::AwaitOrderType);
        assert!(session.store().is_empty());
        assert!(session.console().printed("maximum number of pizzas per order is 5"));
    }

    #[test]
    fn test_summarize_appends_order() {
        let mut session = session(&[]);
        let params = OrderCreate {
            customer_name: "Amy".to_string(),
            order_kind: OrderKind::Delivery,
            customer_address: "1 Crust Lane".to_string(),
            customer_phone: "021".to_string(),
            line_items: vec![Menu::default().lookup(1).unwrap(), Menu::default().lookup(3).unwrap()],
            pizza_subtotal: Money(1700),
        };
        let next = session.step(SessionState::Summarize(params)).unwrap();
        assert_eq!(next, SessionState::KitchenDisplay);
        assert_eq!(session.store().len(), 1);
        assert!(session.console().printed("Total Cost: $19.50"));
        assert!(session.console().printed("Delivery Charge: $2.50"));
    }

    #[test]
    fn test_terminate_is_terminal() {
        let mut session = session(&[]);
        let next = session.step(SessionState::Terminate).unwrap();
        assert_eq!(next, SessionState::Terminate);
    }

    #[test]
    fn test_continue_no_terminates() {
        let mut session = session(&["no"]);
        let next = session.step(SessionState::OfferContinue).unwrap();
        assert_eq!(next, SessionState::Terminate);
        assert!(session.console().printed("Goodbye!"));
    }
}
